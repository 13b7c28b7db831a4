//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{MessagePushError, ValueObjectError};

/// WebSocket イベント処理のエラー
///
/// 存在しないルームへの操作や抽選の業務的な失敗はエラーではなく、
/// 各ユースケースの中でクライアントへの通知、または無視として扱います。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValueObjectError),

    #[error(transparent)]
    PushFailed(#[from] MessagePushError),
}

/// ルーム詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("invalid room id: {0}")]
    InvalidRoomId(ValueObjectError),

    #[error("room '{0}' not found")]
    RoomNotFound(String),
}
