//! Room relay and lottery server.
//!
//! Relays game state between screen and mobile clients grouped by room, and
//! runs a single global name-draw lottery.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin matsuri-server
//! cargo run --bin matsuri-server -- --port 3000 --site lottery --static-dir public
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use matsuri_server::{
    domain::RelayPolicy,
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryLotteryRepository, InMemoryRoomRepository},
    },
    ui::{AppState, Server, ServerConfig, SiteLayout, StaticSite},
};
use matsuri_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "matsuri-server")]
#[command(about = "Room relay and lottery server over WebSocket", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Directory holding the front-end files
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,

    /// Which entry documents to serve
    #[arg(long = "site", env = "SITE_LAYOUT", value_enum, default_value_t = SiteLayout::Spa)]
    site_layout: SiteLayout,

    /// Ignore player_join for rooms that do not exist yet
    #[arg(long, env = "STRICT_PLAYER_JOIN")]
    strict_player_join: bool,

    /// Include the sender in game_status_update broadcasts
    #[arg(long, env = "ECHO_STATUS_TO_SENDER")]
    echo_status_to_sender: bool,

    /// Remove a session's participant entries when it disconnects
    #[arg(long, env = "PRUNE_ON_DISCONNECT")]
    prune_on_disconnect: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
            site_layout: args.site_layout,
            policy: RelayPolicy {
                create_room_on_player_join: !args.strict_player_join,
                echo_status_to_sender: args.echo_status_to_sender,
                prune_on_disconnect: args.prune_on_disconnect,
            },
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_PKG_NAME"), env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());
    tracing::debug!("Configuration: {:?}", config);

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. MessagePusher
    // 3. UseCases (AppState)
    // 4. Server

    // 1. Create Repositories (in-memory database)
    let room_repository = Arc::new(InMemoryRoomRepository::new());
    let lottery_repository = Arc::new(InMemoryLotteryRepository::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let app_state = AppState::new(
        room_repository,
        lottery_repository,
        message_pusher,
        config.policy,
    );

    // 4. Create and run the server
    let static_site = StaticSite::new(config.static_dir, config.site_layout);
    let server = Server::new(app_state, static_site);
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
