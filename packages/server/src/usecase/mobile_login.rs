//! UseCase: 抽選への登録（モバイルログイン）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - MobileLoginUseCase::execute() メソッド
//! - 名前の検証・重複チェックと、本人への結果通知・全体への名簿配信
//!
//! ### なぜこのテストが必要か
//! - 失敗時は本人にだけ `login_error` が届き、名簿は変わらないことを保証
//! - 成功時は全クライアントに最新の名簿が届く
//!
//! ### どのような状況を想定しているか
//! - 正常系：新しい名前での登録（前後の空白は除去）
//! - 異常系：空白のみの名前、既に使われている名前

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{LotteryRepository, MessagePusher, OutboundEvent, PlayerName, SessionId};

use super::error::RelayError;

/// 抽選登録のユースケース
pub struct MobileLoginUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LotteryRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl MobileLoginUseCase {
    /// 新しい MobileLoginUseCase を作成
    pub fn new(
        repository: Arc<dyn LotteryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 抽選登録を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信元のセッション
    /// * `name` - クライアントが送った名前（文字列以外は JSON 表記を名前とする）
    ///
    /// # Returns
    ///
    /// * `Ok(Some(PlayerName))` - 登録に成功
    /// * `Ok(None)` - 名前が不正または重複（本人に `login_error` を送信済み）
    pub async fn execute(
        &self,
        session_id: &SessionId,
        name: &Value,
    ) -> Result<Option<PlayerName>, RelayError> {
        let name = match PlayerName::try_from(name) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Login rejected for '{}': {}", session_id, e);
                self.reject(session_id, e.to_string()).await?;
                return Ok(None);
            }
        };

        let names = match self
            .repository
            .register(session_id.clone(), name.clone())
            .await
        {
            Ok(names) => names,
            Err(e) => {
                tracing::debug!("Login rejected for '{}': {}", session_id, e);
                self.reject(session_id, e.to_string()).await?;
                return Ok(None);
            }
        };

        self.message_pusher
            .push_to(session_id, &OutboundEvent::LoginSuccess { name: name.clone() })
            .await?;
        self.message_pusher
            .broadcast_all(&OutboundEvent::UpdateUserList(names))
            .await?;

        tracing::info!("'{}' registered for the lottery (session '{}')", name, session_id);
        Ok(Some(name))
    }

    async fn reject(&self, session_id: &SessionId, message: String) -> Result<(), RelayError> {
        self.message_pusher
            .push_to(session_id, &OutboundEvent::LoginError(message))
            .await?;
        Ok(())
    }
}
