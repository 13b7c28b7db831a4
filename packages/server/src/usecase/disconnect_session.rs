//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - 送信チャンネルと購読の解除、参加者エントリの保持または削除
//!
//! ### なぜこのテストが必要か
//! - 既定では切断しても参加者一覧は変わらない（再接続しても同じ一覧が見える）
//! - 削除を有効にした場合は、影響を受けたルームにだけ新しい一覧が配信されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者を保持したままの切断
//! - 正常系：参加者を削除する設定での切断
//! - 正常系：独自の user.id で登録した参加者の削除
//! - エッジケース：どのルームにも参加していないセッションの切断

use std::sync::Arc;

use crate::domain::{MessagePusher, OutboundEvent, RelayPolicy, RoomId, RoomRepository, SessionId};

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 中継ポリシー
    policy: RelayPolicy,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
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

    /// セッション切断を実行
    ///
    /// # Returns
    ///
    /// 参加者一覧が変化したルームの ID（削除が無効な場合は常に空）
    pub async fn execute(&self, session_id: &SessionId) -> Vec<RoomId> {
        // 1. 送信チャンネルと購読を解除
        self.message_pusher.unregister_client(session_id).await;

        if !self.policy.prune_on_disconnect {
            tracing::info!("Session '{}' disconnected", session_id);
            return Vec::new();
        }

        // 2. このセッションが登録した参加者を全ルームから削除
        let changed = self.repository.remove_participants_of(session_id).await;

        // 3. 影響を受けたルームに新しい参加者一覧を配信
        let mut room_ids = Vec::with_capacity(changed.len());
        for (room_id, participants) in changed {
            let event = OutboundEvent::PlayerListUpdate(participants);
            if let Err(e) = self
                .message_pusher
                .broadcast_to_room(&room_id, &event, None)
                .await
            {
                tracing::warn!("Failed to broadcast player list for '{}': {}", room_id, e);
            }
            room_ids.push(room_id);
        }

        tracing::info!(
            "Session '{}' disconnected, pruned from {} room(s)",
            session_id,
            room_ids.len()
        );
        room_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Participant, Payload},
        usecase::test_support::{
            connect, create_test_message_pusher, create_test_room_repository, drain,
            event_names, room_id, session,
        },
    };
    use serde_json::json;

    fn participant(session_id: &str, name: &str) -> Participant {
        Participant::from_user(
            Payload::new(json!({ "name": name })).unwrap(),
            &session(session_id),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_disconnect_retains_participants_by_default() {
        // テスト項目: 既定の設定では切断しても参加者エントリは残る
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let _rx_alice = connect(&message_pusher, "alice").await;
        repository
            .upsert_participant(&room_id("R1"), participant("alice", "A"), true)
            .await
            .unwrap();
        let usecase = DisconnectSessionUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            RelayPolicy::default(),
        );

        // when (操作):
        let changed = usecase.execute(&session("alice")).await;

        // then (期待する結果):
        assert!(changed.is_empty());
        let room = repository.find(&room_id("R1")).await.unwrap();
        assert_eq!(room.participants.len(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_prunes_and_notifies_affected_rooms() {
        // テスト項目: 削除を有効にすると参加者が消え、影響を受けたルームの購読者に新しい一覧が届く
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let _rx_alice = connect(&message_pusher, "alice").await;
        let mut rx_bob = connect(&message_pusher, "bob").await;
        let mut rx_carol = connect(&message_pusher, "carol").await;
        message_pusher.subscribe(&session("bob"), &room_id("R1")).await;
        message_pusher.subscribe(&session("carol"), &room_id("R2")).await;
        repository
            .upsert_participant(&room_id("R1"), participant("alice", "A"), true)
            .await
            .unwrap();
        repository
            .upsert_participant(&room_id("R1"), participant("bob", "B"), true)
            .await
            .unwrap();
        repository.get_or_create(&room_id("R2")).await;
        let policy = RelayPolicy {
            prune_on_disconnect: true,
            ..RelayPolicy::default()
        };
        let usecase =
            DisconnectSessionUseCase::new(repository.clone(), message_pusher.clone(), policy);

        // when (操作):
        let changed = usecase.execute(&session("alice")).await;

        // then (期待する結果):
        assert_eq!(changed, vec![room_id("R1")]);
        let frames = drain(&mut rx_bob);
        assert_eq!(event_names(&frames), vec!["player_list_update"]);
        assert_eq!(frames[0]["data"], json!([{ "id": "bob", "name": "B" }]));
        assert!(drain(&mut rx_carol).is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_without_rooms() {
        // テスト項目: どのルームにも参加していないセッションの切断でも何も配信されない
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let _rx_alice = connect(&message_pusher, "alice").await;
        let policy = RelayPolicy {
            prune_on_disconnect: true,
            ..RelayPolicy::default()
        };
        let usecase = DisconnectSessionUseCase::new(repository, message_pusher.clone(), policy);

        // when (操作):
        let changed = usecase.execute(&session("alice")).await;

        // then (期待する結果):
        assert!(changed.is_empty());
        assert!(
            message_pusher
                .push_to(&session("alice"), &OutboundEvent::GameReset)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_disconnect_prunes_entries_registered_with_custom_ids() {
        // テスト項目: 独自の user.id で登録した参加者も、登録したセッションの切断で削除される
        // given (前提条件):
        let repository = create_test_room_repository();
        let message_pusher = create_test_message_pusher();
        let _rx_host = connect(&message_pusher, "host").await;
        let mut rx_screen = connect(&message_pusher, "screen").await;
        message_pusher.subscribe(&session("screen"), &room_id("R1")).await;
        for (id, name) in [(json!("s1"), "A"), (json!(7), "B")] {
            let participant = Participant::from_user(
                Payload::new(json!({ "id": id, "name": name })).unwrap(),
                &session("host"),
            )
            .unwrap();
            repository
                .upsert_participant(&room_id("R1"), participant, true)
                .await
                .unwrap();
        }
        let policy = RelayPolicy {
            prune_on_disconnect: true,
            ..RelayPolicy::default()
        };
        let usecase =
            DisconnectSessionUseCase::new(repository.clone(), message_pusher.clone(), policy);

        // when (操作):
        let changed = usecase.execute(&session("host")).await;

        // then (期待する結果):
        assert_eq!(changed, vec![room_id("R1")]);
        assert!(repository.find(&room_id("R1")).await.unwrap().participants.is_empty());
        let frames = drain(&mut rx_screen);
        assert_eq!(event_names(&frames), vec!["player_list_update"]);
        assert_eq!(frames[0]["data"], json!([]));
    }
}
