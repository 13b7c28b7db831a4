//! UseCase: ルーム参加（表示側クライアント）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルームの遅延作成と購読、`init_data` → `game_status_update` の順での送信
//!
//! ### なぜこのテストが必要か
//! - 表示側は `init_data` を受け取ってから画面を組み立てるため、順序が重要
//! - 送信は本人のみで、他の購読者には何も届かないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：未知のルームへの参加（作成される）
//! - 正常系：既存ルームへの参加（現在の状態が届く）
//! - 異常系：不正なルーム ID

use std::sync::Arc;

use crate::domain::{MessagePusher, OutboundEvent, RoomId, RoomRepository, SessionId};

use super::error::RelayError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 参加するセッション
    /// * `room_id` - クライアントが指定したルーム ID（未検証）
    pub async fn execute(
        &self,
        session_id: &SessionId,
        room_id: String,
    ) -> Result<(), RelayError> {
        let room_id = RoomId::new(room_id)?;

        // 1. ルームを取得（なければ作成）
        let room = self.repository.get_or_create(&room_id).await;

        // 2. 購読を追加
        self.message_pusher.subscribe(session_id, &room_id).await;

        // 3. 本人に現在の状態を送信
        let game_state = room.game_state.clone();
        self.message_pusher
            .push_to(session_id, &OutboundEvent::InitData(room))
            .await?;
        self.message_pusher
            .push_to(session_id, &OutboundEvent::GameStatusUpdate(game_state))
            .await?;

        tracing::info!("Session '{}' joined room '{}'", session_id, room_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{GameState, Payload, ValueObjectError},
        usecase::test_support::{
            connect, create_test_message_pusher, create_test_room_repository, drain,
            event_names, room_id, session,
        },
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_join_unknown_room_creates_lobby() {
        // テスト項目: 未知のルームに参加すると空の参加者・ロビー状態の init_data と game_status_update が届く
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let mut rx = connect(&message_pusher, "screen").await;
        let usecase = JoinRoomUseCase::new(repository.clone(), message_pusher.clone());

        // when (操作):
        usecase
            .execute(&session("screen"), "R1".to_string())
            .await
            .unwrap();

        // then (期待する結果):
        let frames = drain(&mut rx);
        assert_eq!(event_names(&frames), vec!["init_data", "game_status_update"]);
        assert_eq!(
            frames[0]["data"],
            json!({
                "roomId": "R1",
                "participants": [],
                "gameState": { "status": "lobby" }
            })
        );
        assert_eq!(frames[1]["data"], json!({ "status": "lobby" }));
        assert!(repository.find(&room_id("R1")).await.is_some());
        assert_eq!(message_pusher.subscriber_count(&room_id("R1")).await, 1);
    }

    #[tokio::test]
    async fn test_join_existing_room_sends_current_state_only_to_caller() {
        // テスト項目: 既存ルームに参加すると現在の状態が本人にだけ届く
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let mut rx_first = connect(&message_pusher, "first").await;
        let mut rx_second = connect(&message_pusher, "second").await;
        let usecase = JoinRoomUseCase::new(repository.clone(), message_pusher.clone());
        usecase
            .execute(&session("first"), "R1".to_string())
            .await
            .unwrap();
        drain(&mut rx_first);
        repository
            .set_game_state(
                &room_id("R1"),
                GameState::new(Payload::new(json!({ "status": "playing", "round": 2 })).unwrap()),
            )
            .await
            .unwrap();

        // when (操作):
        usecase
            .execute(&session("second"), "R1".to_string())
            .await
            .unwrap();

        // then (期待する結果):
        let frames = drain(&mut rx_second);
        assert_eq!(frames[1]["data"], json!({ "status": "playing", "round": 2 }));
        assert!(drain(&mut rx_first).is_empty());
    }

    #[tokio::test]
    async fn test_join_with_empty_room_id() {
        // テスト項目: 空のルーム ID はエラーになり、ルームは作成されない
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let mut rx = connect(&message_pusher, "screen").await;
        let usecase = JoinRoomUseCase::new(repository.clone(), message_pusher);

        // when (操作):
        let result = usecase.execute(&session("screen"), String::new()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RelayError::InvalidInput(ValueObjectError::Empty("room id")))
        );
        assert!(repository.list_rooms().await.is_empty());
        assert!(drain(&mut rx).is_empty());
    }
}
