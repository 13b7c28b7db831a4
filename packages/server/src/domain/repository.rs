//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは 1 回の呼び出しで読み取りと更新を完結させ、
//! 他のハンドラーから見て不可分に実行されなければなりません。

use async_trait::async_trait;

use super::{
    GameState, Lottery, LotteryError, Participant, PlayerName, RepositoryError, Room, RoomId,
    SessionId,
};

/// Room Repository trait
///
/// プロセス全体で共有するルームの登録簿。
/// ルームは初回参照時に作成され、削除されることはありません。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ルームを取得、なければ初期状態で作成
    async fn get_or_create(&self, room_id: &RoomId) -> Room;

    /// ルームを取得（作成はしない）
    async fn find(&self, room_id: &RoomId) -> Option<Room>;

    /// ルームを初期状態で丸ごと置き換え、新しい状態を返す
    async fn reset(&self, room_id: &RoomId) -> Room;

    /// 参加者を upsert し、更新後の参加者一覧を返す
    ///
    /// `create_missing` が false でルームが存在しない場合は `RoomNotFound`。
    async fn upsert_participant(
        &self,
        room_id: &RoomId,
        participant: Participant,
        create_missing: bool,
    ) -> Result<Vec<Participant>, RepositoryError>;

    /// ゲーム状態を置き換え、新しい状態を返す
    async fn set_game_state(
        &self,
        room_id: &RoomId,
        game_state: GameState,
    ) -> Result<GameState, RepositoryError>;

    /// 指定セッションが登録した参加者を全ルームから削除し、
    /// 変化したルームとその参加者一覧を返す
    async fn remove_participants_of(&self, owner: &SessionId) -> Vec<(RoomId, Vec<Participant>)>;

    /// 全ルームのスナップショット（RoomId 順）
    async fn list_rooms(&self) -> Vec<Room>;
}

/// Lottery Repository trait
///
/// プロセス全体で 1 つの抽選状態と、その乱数源を保持します。
#[async_trait]
pub trait LotteryRepository: Send + Sync {
    /// 抽選状態のスナップショット
    async fn snapshot(&self) -> Lottery;

    /// ユーザーを登録し、登録後の名前一覧を返す
    async fn register(
        &self,
        session_id: SessionId,
        name: PlayerName,
    ) -> Result<Vec<PlayerName>, LotteryError>;

    /// 抽選を 1 回実行し、当選者を返す
    async fn draw(&self) -> Result<PlayerName, LotteryError>;

    /// 登録者・当選者・除外名をすべて消去
    async fn reset(&self);

    /// 除外名を切り替え、切り替え後に除外されていれば true
    async fn toggle_exclude(&self, name: PlayerName) -> bool;
}
