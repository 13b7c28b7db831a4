//! UseCase: セッション接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSessionUseCase::execute() メソッド
//! - セッション ID の割り当てと `connected` イベントの送信
//!
//! ### なぜこのテストが必要か
//! - クライアントは `connected` で受け取った ID を `user.id` として使うことがある
//! - 接続ごとに異なる ID が割り当てられることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続
//! - 異常系：送信チャンネルが既に閉じている

use std::sync::Arc;

use crate::domain::{MessagePusher, OutboundEvent, PusherChannel, SessionId, SessionIdFactory};

use super::error::RelayError;

/// セッション接続のユースケース
pub struct ConnectSessionUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectSessionUseCase {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// セッション接続を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(SessionId)` - 割り当てたセッション ID
    /// * `Err(RelayError)` - `connected` の送信に失敗（登録は解除済み）
    pub async fn execute(&self, sender: PusherChannel) -> Result<SessionId, RelayError> {
        // 1. セッション ID を割り当て
        let session_id = SessionIdFactory::generate();

        // 2. MessagePusher にクライアントを登録
        self.message_pusher
            .register_client(session_id.clone(), sender)
            .await;

        // 3. 割り当てた ID を本人に通知
        let event = OutboundEvent::Connected {
            session_id: session_id.clone(),
        };
        if let Err(e) = self.message_pusher.push_to(&session_id, &event).await {
            self.message_pusher.unregister_client(&session_id).await;
            return Err(e.into());
        }

        tracing::info!("Session '{}' connected", session_id);
        Ok(session_id)
    }
}
