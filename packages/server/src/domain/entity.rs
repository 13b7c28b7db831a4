//! エンティティ: Room / Participant / GameState

use serde_json::{Map, Value, json};

use super::{
    error::ValueObjectError,
    value_object::{ParticipantId, Payload, RoomId, SessionId, Timestamp},
};

/// 新規作成・リセット直後のステータス
pub const LOBBY_STATUS: &str = "lobby";

/// ルームの参加者
///
/// `id` 以外のフィールドはクライアント定義の任意の値で、サーバーは解釈しません。
/// `owner` は最後にこの参加者を登録したセッションで、クライアントには送信されません。
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: ParticipantId,
    pub owner: SessionId,
    pub fields: Map<String, Value>,
}

impl Participant {
    pub fn new(id: ParticipantId, owner: SessionId, fields: Map<String, Value>) -> Self {
        Self { id, owner, fields }
    }

    /// `player_join` の `user` オブジェクトから参加者を作成
    ///
    /// `user.id` があればその値をそのまま ID とし、
    /// ない場合（`null`・空文字列を含む）は送信元のセッション ID を使います。
    pub fn from_user(user: Payload, session_id: &SessionId) -> Result<Self, ValueObjectError> {
        let Value::Object(mut fields) = user.into_value() else {
            return Err(ValueObjectError::NotAnObject("user"));
        };

        let id = match fields.remove("id") {
            Some(value) => ParticipantId::from_json(value)?,
            None => None,
        }
        .unwrap_or_else(|| ParticipantId::from(session_id.clone()));

        Ok(Self::new(id, session_id.clone(), fields))
    }

    /// 同じ参加者の新しい情報をマージ（新しい値で上書き）
    pub fn merge(&mut self, newer: Participant) {
        debug_assert_eq!(self.id, newer.id);
        self.owner = newer.owner;
        self.fields.extend(newer.fields);
    }
}

/// ゲームの状態
///
/// クライアントにとってのみ意味を持つ不透明な値です。
#[derive(Debug, Clone, PartialEq)]
pub struct GameState(Payload);

impl GameState {
    pub fn new(payload: Payload) -> Self {
        Self(payload)
    }

    /// 初期状態 `{"status": "lobby"}`
    pub fn lobby() -> Self {
        Self(Payload::trusted(json!({ "status": LOBBY_STATUS })))
    }

    /// `status` フィールドが文字列であれば返す
    pub fn status(&self) -> Option<&str> {
        self.0.as_value().get("status").and_then(Value::as_str)
    }

    pub fn as_payload(&self) -> &Payload {
        &self.0
    }

    pub fn into_payload(self) -> Payload {
        self.0
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::lobby()
    }
}

/// ルーム
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub participants: Vec<Participant>,
    pub game_state: GameState,
    pub created_at: Timestamp,
}

impl Room {
    /// 参加者なし・ロビー状態のルームを作成
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            participants: Vec::new(),
            game_state: GameState::lobby(),
            created_at,
        }
    }

    /// 参加者を追加、または同じ ID の参加者を更新
    ///
    /// 既存の参加者は一覧内の位置を保ったままフィールドがマージされます。
    pub fn upsert_participant(&mut self, participant: Participant) {
        match self
            .participants
            .iter_mut()
            .find(|p| p.id == participant.id)
        {
            Some(existing) => existing.merge(participant),
            None => self.participants.push(participant),
        }
    }

    /// 指定セッションが登録した参加者をすべて削除（削除があれば true）
    pub fn remove_participants_of(&mut self, owner: &SessionId) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| &p.owner != owner);
        self.participants.len() != before
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }
}
