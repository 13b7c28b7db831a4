//! 中継ポリシー
//!
//! クライアント実装ごとに挙動が揺れていた点を、明示的な設定として持ちます。

/// イベント中継の挙動を決める設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayPolicy {
    /// `player_join` で存在しないルームを自動作成するか（false なら無視）
    pub create_room_on_player_join: bool,
    /// `game_status_update` の配信に送信者自身を含めるか
    pub echo_status_to_sender: bool,
    /// 切断時にそのセッションの参加者エントリを削除するか
    pub prune_on_disconnect: bool,
}

impl Default for RelayPolicy {
    fn default() -> Self {
        Self {
            create_room_on_player_join: true,
            echo_status_to_sender: false,
            prune_on_disconnect: false,
        }
    }
}
