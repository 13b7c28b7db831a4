//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - WebSocket の `UnboundedSender` を管理
//! - ルームの購読グループを管理
//! - イベントを JSON にエンコードしてクライアントへ送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//! 送信先のタスクが終了していた場合はログに残して読み飛ばします。

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{MessagePushError, MessagePusher, OutboundEvent, PusherChannel, RoomId, SessionId},
    infrastructure::dto::websocket::ServerEvent,
};

#[derive(Default)]
struct Registry {
    /// 接続中のクライアントの WebSocket sender
    clients: HashMap<SessionId, PusherChannel>,
    /// ルームごとの購読セッション
    rooms: HashMap<RoomId, BTreeSet<SessionId>>,
}

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::new();
/// pusher.register_client(session_id.clone(), tx).await;
/// pusher.subscribe(&session_id, &room_id).await;
/// pusher.broadcast_to_room(&room_id, &OutboundEvent::GameReset, None).await?;
/// ```
#[derive(Default)]
pub struct WebSocketMessagePusher {
    registry: Mutex<Registry>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }

    /// ルームの購読者数（登録解除済みのセッションは含まない）
    pub async fn subscriber_count(&self, room_id: &RoomId) -> usize {
        let registry = self.registry.lock().await;
        registry.rooms.get(room_id).map_or(0, BTreeSet::len)
    }

    fn encode(event: &OutboundEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerEvent::from(event))
            .map_err(|e| MessagePushError::EncodeFailed(e.to_string()))
    }

    fn send_lossy(registry: &Registry, target: &SessionId, frame: &str, event_name: &str) {
        match registry.clients.get(target) {
            Some(sender) => {
                // ブロードキャストでは一部の送信失敗を許容
                if let Err(e) = sender.send(frame.to_string()) {
                    tracing::warn!("Failed to push '{}' to client '{}': {}", event_name, target, e);
                } else {
                    tracing::debug!("Pushed '{}' to client '{}'", event_name, target);
                }
            }
            None => {
                tracing::warn!("Client '{}' not found during broadcast, skipping", target);
            }
        }
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, session_id: SessionId, sender: PusherChannel) {
        let mut registry = self.registry.lock().await;
        tracing::debug!("Client '{}' registered to MessagePusher", session_id);
        registry.clients.insert(session_id, sender);
    }

    async fn unregister_client(&self, session_id: &SessionId) {
        let mut registry = self.registry.lock().await;
        registry.clients.remove(session_id);
        for members in registry.rooms.values_mut() {
            members.remove(session_id);
        }
        registry.rooms.retain(|_, members| !members.is_empty());
        tracing::debug!("Client '{}' unregistered from MessagePusher", session_id);
    }

    async fn subscribe(&self, session_id: &SessionId, room_id: &RoomId) {
        let mut registry = self.registry.lock().await;
        if !registry.clients.contains_key(session_id) {
            tracing::warn!(
                "Client '{}' is not registered, ignoring subscription to '{}'",
                session_id,
                room_id
            );
            return;
        }
        if registry
            .rooms
            .entry(room_id.clone())
            .or_default()
            .insert(session_id.clone())
        {
            tracing::debug!("Client '{}' subscribed to room '{}'", session_id, room_id);
        }
    }

    async fn push_to(
        &self,
        session_id: &SessionId,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let registry = self.registry.lock().await;

        let sender = registry
            .clients
            .get(session_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(session_id.to_string()))?;
        sender
            .send(frame)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed '{}' to client '{}'", event.name(), session_id);
        Ok(())
    }

    async fn broadcast_to_room(
        &self,
        room_id: &RoomId,
        event: &OutboundEvent,
        except: Option<SessionId>,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let registry = self.registry.lock().await;

        let Some(members) = registry.rooms.get(room_id) else {
            tracing::debug!("Room '{}' has no subscribers for '{}'", room_id, event.name());
            return Ok(());
        };
        for target in members.iter().filter(|id| Some(*id) != except.as_ref()) {
            Self::send_lossy(&registry, target, &frame, event.name());
        }
        Ok(())
    }

    async fn broadcast_all(&self, event: &OutboundEvent) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let registry = self.registry.lock().await;

        for target in registry.clients.keys() {
            Self::send_lossy(&registry, target, &frame, event.name());
        }
        Ok(())
    }
}
