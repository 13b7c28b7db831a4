//! UseCase: ルームのリセット
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ResetGameUseCase::execute() メソッド
//! - ルームの初期化と `game_reset` → `init_data` の順での配信
//!
//! ### なぜこのテストが必要か
//! - リセット後は参加者が空・ロビー状態でなければならない
//! - 表示側は `game_reset` を受けてから `init_data` で画面を作り直す
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者とゲーム状態を持つルームのリセット
//! - 異常系：存在しないルームのリセット（無視）

use std::sync::Arc;

use crate::domain::{MessagePusher, OutboundEvent, RoomId, RoomRepository, SessionId};

use super::error::RelayError;

/// ルームリセットのユースケース
pub struct ResetGameUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ResetGameUseCase {
    /// 新しい ResetGameUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルームリセットを実行
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - リセットして配信した
    /// * `Ok(false)` - ルームが存在しないため無視した
    pub async fn execute(
        &self,
        session_id: &SessionId,
        room_id: String,
    ) -> Result<bool, RelayError> {
        let room_id = RoomId::new(room_id)?;

        // ルームは削除されないため、存在確認とリセットの間に消えることはない
        if self.repository.find(&room_id).await.is_none() {
            tracing::debug!(
                "Ignoring reset_game from '{}': room '{}' does not exist",
                session_id,
                room_id
            );
            return Ok(false);
        }

        let room = self.repository.reset(&room_id).await;

        self.message_pusher
            .broadcast_to_room(&room_id, &OutboundEvent::GameReset, None)
            .await?;
        self.message_pusher
            .broadcast_to_room(&room_id, &OutboundEvent::InitData(room), None)
            .await?;

        tracing::info!("Room '{}' reset by '{}'", room_id, session_id);
        Ok(true)
    }
}
