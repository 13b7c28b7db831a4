//! UseCase: 管理画面の初期化
//!
//! 管理画面の接続直後に、現在の名簿と当選者一覧を本人にだけ送ります。

use std::sync::Arc;

use crate::domain::{LotteryRepository, MessagePusher, OutboundEvent, SessionId};

use super::error::RelayError;

/// 管理画面初期化のユースケース
pub struct AdminInitUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LotteryRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl AdminInitUseCase {
    /// 新しい AdminInitUseCase を作成
    pub fn new(
        repository: Arc<dyn LotteryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// `update_user_list` と `update_winners` を本人に送信
    pub async fn execute(&self, session_id: &SessionId) -> Result<(), RelayError> {
        let lottery = self.repository.snapshot().await;

        self.message_pusher
            .push_to(session_id, &OutboundEvent::UpdateUserList(lottery.user_names()))
            .await?;
        self.message_pusher
            .push_to(
                session_id,
                &OutboundEvent::UpdateWinners(lottery.winners().to_vec()),
            )
            .await?;
        Ok(())
    }
}
