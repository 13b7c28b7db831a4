//! UseCase テスト用のヘルパー
//!
//! 実際の InMemory Repository と WebSocketMessagePusher を組み合わせ、
//! 各セッションの受信チャンネルに届いたフレームを検証します。

use std::sync::Arc;

use matsuri_shared::time::FixedClock;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::{
    domain::{MessagePusher, RoomId, SessionId},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryLotteryRepository, InMemoryRoomRepository},
    },
};

pub(crate) fn create_test_room_repository() -> Arc<InMemoryRoomRepository> {
    Arc::new(InMemoryRoomRepository::with_clock(Arc::new(FixedClock::new(
        1_700_000_000_000,
    ))))
}

pub(crate) fn create_test_lottery_repository() -> Arc<InMemoryLotteryRepository> {
    Arc::new(InMemoryLotteryRepository::with_seed(42))
}

pub(crate) fn create_test_message_pusher() -> Arc<WebSocketMessagePusher> {
    Arc::new(WebSocketMessagePusher::new())
}

pub(crate) fn session(id: &str) -> SessionId {
    SessionId::new(id.to_string()).unwrap()
}

pub(crate) fn room_id(id: &str) -> RoomId {
    RoomId::new(id.to_string()).unwrap()
}

/// セッションを登録し、そのセッション宛てのフレームを受け取るチャンネルを返す
pub(crate) async fn connect(
    pusher: &WebSocketMessagePusher,
    id: &str,
) -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    pusher.register_client(session(id), tx).await;
    rx
}

/// 受信済みのフレームをすべて取り出して JSON として返す
pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<Value> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(serde_json::from_str(&frame).unwrap());
    }
    frames
}

/// フレームのイベント名だけを並べる
pub(crate) fn event_names(frames: &[Value]) -> Vec<&str> {
    frames
        .iter()
        .map(|f| f["event"].as_str().unwrap_or_default())
        .collect()
}
