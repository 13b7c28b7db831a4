//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::SessionId,
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::RelayError,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: events addressed to this session
/// (unicast or broadcast) are written to this client's WebSocket connection.
///
/// # Arguments
///
/// * `rx` - Channel receiver for encoded outbound frames
/// * `sender` - WebSocket sink to send messages to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this session to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Use ConnectSessionUseCase to assign a session id
    // (register_client is called inside the UseCase)
    let session_id = match state.connect_session_usecase.execute(tx).await {
        Ok(session_id) => session_id,
        Err(e) => {
            tracing::error!("Failed to set up session: {}", e);
            return;
        }
    };

    // Spawn a task to forward outbound frames to this client
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let session_id_clone = session_id.clone();

    // Spawn a task to receive events from this client; events are handled in arrival order
    // and one at a time across all connections
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", session_id_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received from '{}': {}", session_id_clone, text);
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!(
                                "Dropping unparseable frame from '{}': {}",
                                session_id_clone,
                                e
                            );
                            continue;
                        }
                    };
                    let _guard = state_clone.dispatch_lock.lock().await;
                    if let Err(e) = dispatch(&state_clone, &session_id_clone, event).await {
                        tracing::warn!(
                            "Failed to handle event from '{}': {}",
                            session_id_clone,
                            e
                        );
                    }
                }
                Message::Binary(_) => {
                    tracing::warn!("Dropping binary frame from '{}'", session_id_clone);
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", session_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Use DisconnectSessionUseCase to handle disconnection
    let _guard = state.dispatch_lock.lock().await;
    state.disconnect_session_usecase.execute(&session_id).await;
}

/// Route one inbound event to its use case.
async fn dispatch(
    state: &AppState,
    session_id: &SessionId,
    event: ClientEvent,
) -> Result<(), RelayError> {
    match event {
        ClientEvent::JoinRoom(room_id) => {
            state.join_room_usecase.execute(session_id, room_id).await
        }
        ClientEvent::PlayerJoin(data) => state
            .player_join_usecase
            .execute(session_id, data.room_id, data.user)
            .await
            .map(drop),
        ClientEvent::UpdateGameStatus(data) => state
            .update_game_status_usecase
            .execute(session_id, data.room_id, data.status)
            .await
            .map(drop),
        ClientEvent::ResetGame(data) => state
            .reset_game_usecase
            .execute(session_id, data.room_id)
            .await
            .map(drop),
        ClientEvent::MobileLogin(name) => state
            .mobile_login_usecase
            .execute(session_id, &name)
            .await
            .map(drop),
        ClientEvent::AdminInit => state.admin_init_usecase.execute(session_id).await,
        ClientEvent::AdminStartRolling => state.start_rolling_usecase.execute().await,
        ClientEvent::AdminPerformDraw => state.perform_draw_usecase.execute().await.map(drop),
        ClientEvent::AdminReset => state.reset_lottery_usecase.execute().await,
        ClientEvent::AdminToggleExclude(name) => state
            .toggle_exclude_usecase
            .execute(&name)
            .await
            .map(drop),
    }
}
