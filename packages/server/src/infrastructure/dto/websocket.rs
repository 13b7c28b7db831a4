//! WebSocket event DTOs.
//!
//! Every frame is a JSON text message of the form
//! `{"event": "<name>", "data": <payload>}`. Signal events carry no `data`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound event sent by a screen or mobile client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// `join_room("<roomId>")`
    JoinRoom(String),
    PlayerJoin(PlayerJoinData),
    UpdateGameStatus(UpdateGameStatusData),
    ResetGame(RoomRef),
    /// `mobile_login(<name>)`; any JSON value is accepted and stringified
    MobileLogin(Value),
    AdminInit,
    AdminStartRolling,
    AdminPerformDraw,
    AdminReset,
    /// `admin_toggle_exclude("<name>")`
    AdminToggleExclude(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerJoinData {
    pub room_id: String,
    #[serde(default)]
    pub user: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameStatusData {
    pub room_id: String,
    #[serde(default)]
    pub status: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    pub room_id: String,
}

/// Outbound event delivered to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    Connected(ConnectedData),
    InitData(RoomStateDto),
    GameStatusUpdate(Value),
    PlayerListUpdate(Vec<ParticipantInfo>),
    GameReset,
    LoginSuccess(LoginSuccessData),
    LoginError(String),
    UpdateUserList(Vec<String>),
    UpdateWinners(Vec<String>),
    ClientShowRolling,
    DrawResult(DrawResultData),
    AdminDrawError(String),
    EventReset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedData {
    pub session_id: String,
}

/// Full room state as sent by `init_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateDto {
    pub room_id: String,
    pub participants: Vec<ParticipantInfo>,
    pub game_state: Value,
}

/// Participant entry: `id` plus every client-defined field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    /// `user.id` exactly as the client sent it, or the session id
    pub id: Value,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSuccessData {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResultData {
    pub winner_name: String,
}
