//! UseCase: ゲーム状態の更新
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateGameStatusUseCase::execute() メソッド
//! - ゲーム状態の置き換えと `game_status_update` の配信先
//!
//! ### なぜこのテストが必要か
//! - 状態はクライアント定義の値で、サーバーは解釈せずそのまま保存・中継する
//! - 送信者を配信に含めるかどうかはポリシーで切り替わる
//!
//! ### どのような状況を想定しているか
//! - 正常系：既定（送信者を除外）と、送信者を含める設定
//! - 異常系：存在しないルームの更新（無視）

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{
    GameState, MessagePusher, OutboundEvent, Payload, RelayPolicy, RepositoryError, RoomId,
    RoomRepository, SessionId,
};

use super::error::RelayError;

/// ゲーム状態更新のユースケース
pub struct UpdateGameStatusUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 中継ポリシー
    policy: RelayPolicy,
}

impl UpdateGameStatusUseCase {
    /// 新しい UpdateGameStatusUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        policy: RelayPolicy,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            policy,
        }
    }

    /// ゲーム状態の更新を実行
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 状態を更新して配信した
    /// * `Ok(false)` - ルームが存在しないため無視した
    pub async fn execute(
        &self,
        session_id: &SessionId,
        room_id: String,
        status: Value,
    ) -> Result<bool, RelayError> {
        let room_id = RoomId::new(room_id)?;
        let game_state = GameState::new(Payload::new(status)?);

        let game_state = match self.repository.set_game_state(&room_id, game_state).await {
            Ok(game_state) => game_state,
            Err(RepositoryError::RoomNotFound(_)) => {
                tracing::debug!(
                    "Ignoring update_game_status from '{}': room '{}' does not exist",
                    session_id,
                    room_id
                );
                return Ok(false);
            }
        };

        let except = (!self.policy.echo_status_to_sender).then(|| session_id.clone());
        self.message_pusher
            .broadcast_to_room(&room_id, &OutboundEvent::GameStatusUpdate(game_state), except)
            .await?;

        tracing::debug!("Game status of room '{}' updated by '{}'", room_id, session_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{
        connect, create_test_message_pusher, create_test_room_repository, drain, room_id,
        session,
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_update_excludes_sender_by_default() {
        // テスト項目: 既定では送信者以外の購読者にだけ game_status_update が届き、状態はそのまま保存される
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let mut rx_screen = connect(&message_pusher, "screen").await;
        let mut rx_host = connect(&message_pusher, "host").await;
        message_pusher.subscribe(&session("screen"), &room_id("R1")).await;
        message_pusher.subscribe(&session("host"), &room_id("R1")).await;
        repository.get_or_create(&room_id("R1")).await;
        let usecase = UpdateGameStatusUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            RelayPolicy::default(),
        );
        let status = json!({ "status": "playing", "round": 1 });

        // when (操作):
        let applied = usecase
            .execute(&session("host"), "R1".to_string(), status.clone())
            .await
            .unwrap();

        // then (期待する結果):
        assert!(applied);
        assert_eq!(
            drain(&mut rx_screen),
            vec![json!({ "event": "game_status_update", "data": status })]
        );
        assert!(drain(&mut rx_host).is_empty());
        let room = repository.find(&room_id("R1")).await.unwrap();
        assert_eq!(room.game_state.as_payload().as_value(), &status);
    }

    #[tokio::test]
    async fn test_update_echoes_to_sender_when_enabled() {
        // テスト項目: 送信者を含める設定では送信者にも届く
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let mut rx_host = connect(&message_pusher, "host").await;
        message_pusher.subscribe(&session("host"), &room_id("R1")).await;
        repository.get_or_create(&room_id("R1")).await;
        let policy = RelayPolicy {
            echo_status_to_sender: true,
            ..RelayPolicy::default()
        };
        let usecase =
            UpdateGameStatusUseCase::new(repository.clone(), message_pusher.clone(), policy);

        // when (操作):
        usecase
            .execute(&session("host"), "R1".to_string(), json!({ "status": "ended" }))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(drain(&mut rx_host).len(), 1);
    }

    #[tokio::test]
    async fn test_update_on_missing_room_is_ignored() {
        // テスト項目: 存在しないルームの更新は無視され、ルームは作成されない
        // given (前提条件):
        let repository = create_test_room_repository();
        let usecase = UpdateGameStatusUseCase::new(
            repository.clone(),
            create_test_message_pusher(),
            RelayPolicy::default(),
        );

        // when (操作):
        let applied = usecase
            .execute(&session("host"), "nope".to_string(), json!({ "status": "x" }))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(!applied);
        assert!(repository.find(&room_id("nope")).await.is_none());
    }
}
