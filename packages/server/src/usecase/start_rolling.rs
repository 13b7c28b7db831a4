//! UseCase: 抽選演出の開始
//!
//! 状態は変更せず、全クライアントに `client_show_rolling` を送ります。

use std::sync::Arc;

use crate::domain::{MessagePusher, OutboundEvent};

use super::error::RelayError;

/// 抽選演出開始のユースケース
pub struct StartRollingUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl StartRollingUseCase {
    /// 新しい StartRollingUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    pub async fn execute(&self) -> Result<(), RelayError> {
        self.message_pusher
            .broadcast_all(&OutboundEvent::ClientShowRolling)
            .await?;
        tracing::debug!("Rolling animation started");
        Ok(())
    }
}
