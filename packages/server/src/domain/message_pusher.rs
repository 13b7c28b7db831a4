//! MessagePusher trait 定義
//!
//! クライアントへの通知手段を抽象化します。
//! セッションごとの送信チャンネルと、ルーム単位の購読グループを管理します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{MessagePushError, OutboundEvent, RoomId, SessionId};

/// クライアントへの送信チャンネル（エンコード済みのテキストフレーム）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// 送信は fire-and-forget です。配信確認や再送は行いません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントの送信チャンネルを登録
    async fn register_client(&self, session_id: SessionId, sender: PusherChannel);

    /// クライアントの登録を解除（購読中のルームからも外す）
    async fn unregister_client(&self, session_id: &SessionId);

    /// セッションをルームの購読者に追加（冪等）
    async fn subscribe(&self, session_id: &SessionId, room_id: &RoomId);

    /// 特定のクライアントに送信
    async fn push_to(
        &self,
        session_id: &SessionId,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;

    /// ルームの購読者全員に送信（`except` を指定したセッションは除く）
    async fn broadcast_to_room(
        &self,
        room_id: &RoomId,
        event: &OutboundEvent,
        except: Option<SessionId>,
    ) -> Result<(), MessagePushError>;

    /// 接続中の全クライアントに送信
    async fn broadcast_all(&self, event: &OutboundEvent) -> Result<(), MessagePushError>;
}
