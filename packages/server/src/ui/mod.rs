//! HTTP / WebSocket front of the relay server.

pub mod config;
mod handler;
mod server;
mod signal;
pub mod state;
pub mod static_site;

pub use config::{ServerConfig, SiteLayout};
pub use server::Server;
pub use state::AppState;
pub use static_site::StaticSite;
