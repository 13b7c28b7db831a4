//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::websocket::ParticipantInfo;

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub participants: Vec<Value>,
    /// `gameState.status` when it is a string
    pub status: Option<String>,
    pub created_at: String,
}

/// Response of `GET /api/rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub id: String,
    pub participants: Vec<ParticipantInfo>,
    pub game_state: Value,
    pub created_at: String,
}

/// Response of `GET /api/lottery`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryDto {
    pub users: Vec<String>,
    pub winners: Vec<String>,
    pub excluded: Vec<String>,
    pub candidates: Vec<String>,
}
