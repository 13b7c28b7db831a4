//! UseCase: プレイヤー参加（モバイル側クライアント）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PlayerJoinUseCase::execute() メソッド
//! - 参加者の upsert と、ルームの購読者全員（送信者を含む）への一覧配信
//!
//! ### なぜこのテストが必要か
//! - 同じ ID で何度参加しても一覧は 1 件のまま、最新の値になることを保証
//! - 存在しないルームへの参加の扱いがポリシーに従うことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：既存ルームへの参加、同じ ID での再参加
//! - 正常系：存在しないルームへの参加（自動作成）
//! - 異常系：存在しないルームへの参加（厳格モードでは無視）
//! - 異常系：user がオブジェクトでない

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{
    MessagePusher, OutboundEvent, Participant, Payload, RelayPolicy, RepositoryError, RoomId,
    RoomRepository, SessionId,
};

use super::error::RelayError;

/// プレイヤー参加のユースケース
pub struct PlayerJoinUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 中継ポリシー
    policy: RelayPolicy,
}

impl PlayerJoinUseCase {
    /// 新しい PlayerJoinUseCase を作成
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

    /// プレイヤー参加を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信元のセッション
    /// * `room_id` - 参加先のルーム ID（未検証）
    /// * `user` - クライアント定義の参加者情報（`id` は任意）
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 参加者一覧を更新して配信した
    /// * `Ok(false)` - ルームが存在せず、ポリシーにより無視した
    /// * `Err(RelayError)` - 入力が不正、または配信に失敗
    pub async fn execute(
        &self,
        session_id: &SessionId,
        room_id: String,
        user: Value,
    ) -> Result<bool, RelayError> {
        let room_id = RoomId::new(room_id)?;
        let participant = Participant::from_user(Payload::new(user)?, session_id)?;
        let participant_id = participant.id.clone();

        // 1. 参加者を upsert
        let participants = match self
            .repository
            .upsert_participant(
                &room_id,
                participant,
                self.policy.create_room_on_player_join,
            )
            .await
        {
            Ok(participants) => participants,
            Err(RepositoryError::RoomNotFound(_)) => {
                tracing::debug!(
                    "Ignoring player_join from '{}': room '{}' does not exist",
                    session_id,
                    room_id
                );
                return Ok(false);
            }
        };

        // 2. 送信者をルームの購読者に追加（自分自身にも一覧が届くように）
        self.message_pusher.subscribe(session_id, &room_id).await;

        // 3. 購読者全員に参加者一覧を配信
        self.message_pusher
            .broadcast_to_room(&room_id, &OutboundEvent::PlayerListUpdate(participants), None)
            .await?;

        tracing::info!(
            "Participant '{}' joined room '{}' (session '{}')",
            participant_id,
            room_id,
            session_id
        );
        Ok(true)
    }
}
