//! Conversion logic between domain entities and DTOs.

use matsuri_shared::time::timestamp_to_rfc3339;

use crate::domain::{Lottery, OutboundEvent, Participant, PlayerName, Room};
use crate::infrastructure::dto::{http, websocket as ws};

fn names(list: &[PlayerName]) -> Vec<String> {
    list.iter().map(|n| n.as_str().to_string()).collect()
}

// ========================================
// Domain Entity → WebSocket DTO
// ========================================

impl From<&Participant> for ws::ParticipantInfo {
    fn from(model: &Participant) -> Self {
        Self {
            id: model.id.as_value().clone(),
            fields: model.fields.clone(),
        }
    }
}

impl From<&Room> for ws::RoomStateDto {
    fn from(model: &Room) -> Self {
        Self {
            room_id: model.id.as_str().to_string(),
            participants: model.participants.iter().map(Into::into).collect(),
            game_state: model.game_state.as_payload().as_value().clone(),
        }
    }
}

impl From<&OutboundEvent> for ws::ServerEvent {
    fn from(event: &OutboundEvent) -> Self {
        match event {
            OutboundEvent::Connected { session_id } => Self::Connected(ws::ConnectedData {
                session_id: session_id.as_str().to_string(),
            }),
            OutboundEvent::InitData(room) => Self::InitData(room.into()),
            OutboundEvent::GameStatusUpdate(state) => {
                Self::GameStatusUpdate(state.as_payload().as_value().clone())
            }
            OutboundEvent::PlayerListUpdate(participants) => {
                Self::PlayerListUpdate(participants.iter().map(Into::into).collect())
            }
            OutboundEvent::GameReset => Self::GameReset,
            OutboundEvent::LoginSuccess { name } => Self::LoginSuccess(ws::LoginSuccessData {
                name: name.as_str().to_string(),
            }),
            OutboundEvent::LoginError(message) => Self::LoginError(message.clone()),
            OutboundEvent::UpdateUserList(list) => Self::UpdateUserList(names(list)),
            OutboundEvent::UpdateWinners(list) => Self::UpdateWinners(names(list)),
            OutboundEvent::ClientShowRolling => Self::ClientShowRolling,
            OutboundEvent::DrawResult { winner_name } => Self::DrawResult(ws::DrawResultData {
                winner_name: winner_name.as_str().to_string(),
            }),
            OutboundEvent::AdminDrawError(message) => Self::AdminDrawError(message.clone()),
            OutboundEvent::EventReset => Self::EventReset,
        }
    }
}

// ========================================
// Domain Entity → HTTP DTO
// ========================================

impl From<&Room> for http::RoomSummaryDto {
    fn from(model: &Room) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            participants: model
                .participants
                .iter()
                .map(|p| p.id.as_value().clone())
                .collect(),
            status: model.game_state.status().map(str::to_string),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

impl From<&Room> for http::RoomDetailDto {
    fn from(model: &Room) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            participants: model.participants.iter().map(Into::into).collect(),
            game_state: model.game_state.as_payload().as_value().clone(),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

impl From<&Lottery> for http::LotteryDto {
    fn from(model: &Lottery) -> Self {
        Self {
            users: names(&model.user_names()),
            winners: names(model.winners()),
            excluded: model.excluded().map(|n| n.as_str().to_string()).collect(),
            candidates: model
                .candidates()
                .into_iter()
                .map(|u| u.name.as_str().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Payload, RoomId, SessionId, Timestamp};
    use serde_json::json;

    fn create_test_room() -> Room {
        let mut room = Room::new(
            RoomId::new("R1".to_string()).unwrap(),
            Timestamp::new(1_672_531_200_000),
        );
        let session = SessionId::new("s1".to_string()).unwrap();
        room.upsert_participant(
            Participant::from_user(
                Payload::new(json!({ "id": "s1", "name": "A" })).unwrap(),
                &session,
            )
            .unwrap(),
        );
        room
    }

    #[test]
    fn test_room_to_init_data() {
        // テスト項目: Room が init_data の DTO に変換される
        // given (前提条件):
        let room = create_test_room();

        // when (操作):
        let event = ws::ServerEvent::from(&OutboundEvent::InitData(room));

        // then (期待する結果):
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event": "init_data",
                "data": {
                    "roomId": "R1",
                    "participants": [{ "id": "s1", "name": "A" }],
                    "gameState": { "status": "lobby" }
                }
            })
        );
    }

    #[test]
    fn test_room_to_summary() {
        // テスト項目: Room が HTTP のサマリー DTO に変換される
        // given (前提条件):
        let room = create_test_room();

        // when (操作):
        let dto = http::RoomSummaryDto::from(&room);

        // then (期待する結果):
        assert_eq!(dto.id, "R1");
        assert_eq!(dto.participants, vec![json!("s1")]);
        assert_eq!(dto.status.as_deref(), Some("lobby"));
        assert_eq!(dto.created_at, "2023-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_lottery_to_dto() {
        // テスト項目: Lottery の候補は 登録者 − 当選者 − 除外名 で出力される
        // given (前提条件):
        let mut lottery = Lottery::new();
        for (i, n) in ["A", "B", "C"].iter().enumerate() {
            lottery
                .register(
                    SessionId::new(format!("s{i}")).unwrap(),
                    PlayerName::new(n).unwrap(),
                )
                .unwrap();
        }
        lottery.toggle_exclude(PlayerName::new("B").unwrap());

        // when (操作):
        let dto = http::LotteryDto::from(&lottery);

        // then (期待する結果):
        assert_eq!(dto.users, vec!["A", "B", "C"]);
        assert!(dto.winners.is_empty());
        assert_eq!(dto.excluded, vec!["B"]);
        assert_eq!(dto.candidates, vec!["A", "C"]);
    }
}
