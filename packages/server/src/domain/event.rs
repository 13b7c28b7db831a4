//! クライアントへ送るイベント
//!
//! ユースケースはこの型で「何を送るか」を表現し、
//! ワイヤーフォーマットへの変換は Infrastructure 層（DTO）が担当します。

use super::{
    entity::{GameState, Participant, Room},
    value_object::{PlayerName, SessionId},
};

/// サーバーからクライアントへ送るイベント
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    /// 接続直後に割り当てたセッション ID を通知
    Connected { session_id: SessionId },
    /// ルーム全体の状態
    InitData(Room),
    /// ゲーム状態の更新
    GameStatusUpdate(GameState),
    /// 参加者一覧の更新
    PlayerListUpdate(Vec<Participant>),
    /// ルームのリセット通知（シグナルのみ）
    GameReset,
    LoginSuccess { name: PlayerName },
    LoginError(String),
    /// 登録済みの名前一覧
    UpdateUserList(Vec<PlayerName>),
    /// 当選者一覧
    UpdateWinners(Vec<PlayerName>),
    /// 抽選演出の開始（シグナルのみ）
    ClientShowRolling,
    DrawResult { winner_name: PlayerName },
    AdminDrawError(String),
    /// 抽選イベント全体のリセット通知（シグナルのみ）
    EventReset,
}

impl OutboundEvent {
    /// ワイヤー上のイベント名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::InitData(_) => "init_data",
            Self::GameStatusUpdate(_) => "game_status_update",
            Self::PlayerListUpdate(_) => "player_list_update",
            Self::GameReset => "game_reset",
            Self::LoginSuccess { .. } => "login_success",
            Self::LoginError(_) => "login_error",
            Self::UpdateUserList(_) => "update_user_list",
            Self::UpdateWinners(_) => "update_winners",
            Self::ClientShowRolling => "client_show_rolling",
            Self::DrawResult { .. } => "draw_result",
            Self::AdminDrawError(_) => "admin_draw_error",
            Self::EventReset => "event_reset",
        }
    }
}
