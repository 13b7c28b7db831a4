//! UseCase: 抽選の実行
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PerformDrawUseCase::execute() メソッド
//! - 候補からの当選者決定と `draw_result` / `admin_draw_error` の全体配信
//!
//! ### なぜこのテストが必要か
//! - 当選者は二度選ばれず、候補がなくなったらエラーを全体に通知する
//!
//! ### どのような状況を想定しているか
//! - 正常系：候補が 1 名だけ残っている
//! - 異常系：候補が空

use std::sync::Arc;

use crate::domain::{LotteryError, LotteryRepository, MessagePusher, OutboundEvent, PlayerName};

use super::error::RelayError;

/// 抽選実行のユースケース
pub struct PerformDrawUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LotteryRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl PerformDrawUseCase {
    /// 新しい PerformDrawUseCase を作成
    pub fn new(
        repository: Arc<dyn LotteryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 抽選を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(PlayerName))` - 当選者
    /// * `Ok(None)` - 候補が空（`admin_draw_error` を全体に送信済み）
    pub async fn execute(&self) -> Result<Option<PlayerName>, RelayError> {
        match self.repository.draw().await {
            Ok(winner) => {
                self.message_pusher
                    .broadcast_all(&OutboundEvent::DrawResult {
                        winner_name: winner.clone(),
                    })
                    .await?;
                tracing::info!("Draw result: '{}'", winner);
                Ok(Some(winner))
            }
            Err(e @ LotteryError::NoCandidates) => {
                tracing::info!("Draw skipped: {}", e);
                self.message_pusher
                    .broadcast_all(&OutboundEvent::AdminDrawError(e.to_string()))
                    .await?;
                Ok(None)
            }
            Err(e @ LotteryError::DuplicateName(_)) => {
                tracing::warn!("Unexpected lottery error during draw: {}", e);
                Ok(None)
            }
        }
    }
}
