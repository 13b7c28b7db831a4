//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクトの生成エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("payload is {size} bytes, limit is {max} bytes")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("{0} must be a JSON object")]
    NotAnObject(&'static str),

    #[error("{0} must be a string, number or boolean")]
    NotAScalar(&'static str),
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
}

/// 抽選操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotteryError {
    #[error("name '{0}' is already taken")]
    DuplicateName(String),

    #[error("no eligible participants left to draw")]
    NoCandidates,
}

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' not found")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode message: {0}")]
    EncodeFailed(String),
}
