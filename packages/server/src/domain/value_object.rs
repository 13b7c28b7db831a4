//! 値オブジェクト
//!
//! 生成時にバリデーションを行い、不正な値を持つインスタンスが
//! 存在しないことを型で保証します。

use std::fmt;

use serde::Serialize;

use super::error::ValueObjectError;

/// RoomId の最大長（文字数）
pub const ROOM_ID_MAX_LEN: usize = 128;

/// PlayerName の最大長（文字数）
pub const PLAYER_NAME_MAX_LEN: usize = 50;

/// Payload をシリアライズした際の最大バイト数
pub const PAYLOAD_MAX_BYTES: usize = 16 * 1024;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValueObjectError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value.to_string())
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValueObjectError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl $name {
            #[doc = concat!("新しい `", stringify!($name), "` を作成（空文字列は不可）")]
            pub fn new(value: String) -> Result<Self, ValueObjectError> {
                if value.is_empty() {
                    return Err(ValueObjectError::Empty($field));
                }
                Ok(Self(value))
            }
        }
    };
}

string_id!(
    /// 接続ごとにサーバーが割り当てるセッション ID
    SessionId,
    "session id"
);

/// ルーム内の参加者 ID（`player_join` の `user.id`）
///
/// クライアントが送った値（文字列・数値・真偽値）をそのまま保持し、
/// 同じ JSON 値どうしのみを同一の参加者とみなします。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(serde_json::Value);

impl ParticipantId {
    /// `user.id` の値から ParticipantId を作成
    ///
    /// `null` と空文字列は未指定として `None` を返します。
    /// オブジェクトと配列は ID として受け付けません。
    pub fn from_json(value: serde_json::Value) -> Result<Option<Self>, ValueObjectError> {
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) if s.is_empty() => Ok(None),
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                Err(ValueObjectError::NotAScalar("user id"))
            }
            scalar => Ok(Some(Self(scalar))),
        }
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<SessionId> for ParticipantId {
    fn from(session_id: SessionId) -> Self {
        Self(serde_json::Value::String(session_id.0))
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// SessionId の生成器
pub struct SessionIdFactory;

impl SessionIdFactory {
    /// UUID v4 で新しい SessionId を生成
    pub fn generate() -> SessionId {
        SessionId(uuid::Uuid::new_v4().to_string())
    }
}

/// クライアントが指定するルーム ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// 新しい RoomId を作成
    ///
    /// 空文字列および `ROOM_ID_MAX_LEN` 文字を超える値は不可。
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::Empty("room id"));
        }
        if value.chars().count() > ROOM_ID_MAX_LEN {
            return Err(ValueObjectError::TooLong {
                field: "room id",
                max: ROOM_ID_MAX_LEN,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

/// 抽選に登録するプレイヤー名
///
/// 前後の空白を除去した値を保持します。比較は大文字小文字を区別する完全一致です。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// 新しい PlayerName を作成（trim 後に空、または長すぎる場合はエラー）
    pub fn new(value: &str) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::Empty("name"));
        }
        if trimmed.chars().count() > PLAYER_NAME_MAX_LEN {
            return Err(ValueObjectError::TooLong {
                field: "name",
                max: PLAYER_NAME_MAX_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for PlayerName {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&serde_json::Value> for PlayerName {
    type Error = ValueObjectError;

    /// 文字列以外の値は JSON 表現を名前として扱う
    ///
    /// `null`・`false`・`0` は空の名前とみなします。
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => Self::new(s),
            serde_json::Value::Null | serde_json::Value::Bool(false) => {
                Err(ValueObjectError::Empty("name"))
            }
            serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => {
                Err(ValueObjectError::Empty("name"))
            }
            other => Self::new(&other.to_string()),
        }
    }
}

/// クライアントが定義する不透明なペイロード
///
/// サーバーは中身を解釈せず、保存と中継のみを行います。
/// シリアライズ後のサイズが `PAYLOAD_MAX_BYTES` を超える値は受け付けません。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(serde_json::Value);

impl Payload {
    /// 新しい Payload を作成（サイズ上限を検証）
    pub fn new(value: serde_json::Value) -> Result<Self, ValueObjectError> {
        let size = serde_json::to_vec(&value)
            .map(|bytes| bytes.len())
            .unwrap_or(usize::MAX);
        if size > PAYLOAD_MAX_BYTES {
            return Err(ValueObjectError::PayloadTooLarge {
                size,
                max: PAYLOAD_MAX_BYTES,
            });
        }
        Ok(Self(value))
    }

    /// サーバー自身が組み立てる小さな値用（サイズ検証を省略）
    pub(crate) fn trusted(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl TryFrom<serde_json::Value> for Payload {
    type Error = ValueObjectError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
