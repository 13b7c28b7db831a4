//! UseCase: 抽選イベント全体のリセット
//!
//! 登録者・当選者・除外名をすべて消去し、全クライアントに
//! `event_reset` と空の `update_user_list` を送ります。

use std::sync::Arc;

use crate::domain::{LotteryRepository, MessagePusher, OutboundEvent};

use super::error::RelayError;

/// 抽選リセットのユースケース
pub struct ResetLotteryUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LotteryRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ResetLotteryUseCase {
    /// 新しい ResetLotteryUseCase を作成
    pub fn new(
        repository: Arc<dyn LotteryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(&self) -> Result<(), RelayError> {
        self.repository.reset().await;

        self.message_pusher
            .broadcast_all(&OutboundEvent::EventReset)
            .await?;
        self.message_pusher
            .broadcast_all(&OutboundEvent::UpdateUserList(Vec::new()))
            .await?;

        tracing::info!("Lottery event reset");
        Ok(())
    }
}
