//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## 排他制御
//!
//! 全ルームを 1 つの `Mutex` で保護します。各メソッドはロックを取得したまま
//! 読み取りと更新を完結させるため、ハンドラー同士の更新が交錯することはありません。
//!
//! ## リソース
//!
//! ルームは削除も期限切れもしません。短時間のイベント用途を前提とした割り切りです。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use matsuri_shared::time::{Clock, SystemClock};
use tokio::sync::Mutex;

use crate::domain::{
    GameState, Participant, RepositoryError, Room, RoomId, RoomRepository, SessionId, Timestamp,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// RoomId → Room
    rooms: Mutex<HashMap<RoomId, Room>>,
    /// ルーム作成時刻の取得元
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    /// システム時刻を使う InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// 時刻の取得元を指定して作成
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn fresh_room(&self, room_id: &RoomId) -> Room {
        Room::new(room_id.clone(), Timestamp::new(self.clock.now_millis()))
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn get_or_create(&self, room_id: &RoomId) -> Room {
        let mut rooms = self.rooms.lock().await;
        if let Some(room) = rooms.get(room_id) {
            return room.clone();
        }
        let room = self.fresh_room(room_id);
        rooms.insert(room_id.clone(), room.clone());
        tracing::info!("Room '{}' created", room_id);
        room
    }

    async fn find(&self, room_id: &RoomId) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).cloned()
    }

    async fn reset(&self, room_id: &RoomId) -> Room {
        let room = self.fresh_room(room_id);
        let mut rooms = self.rooms.lock().await;
        rooms.insert(room_id.clone(), room.clone());
        room
    }

    async fn upsert_participant(
        &self,
        room_id: &RoomId,
        participant: Participant,
        create_missing: bool,
    ) -> Result<Vec<Participant>, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if !rooms.contains_key(room_id) {
            if !create_missing {
                return Err(RepositoryError::RoomNotFound(room_id.to_string()));
            }
            rooms.insert(room_id.clone(), self.fresh_room(room_id));
            tracing::info!("Room '{}' created by player_join", room_id);
        }
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;
        room.upsert_participant(participant);
        Ok(room.participants.clone())
    }

    async fn set_game_state(
        &self,
        room_id: &RoomId,
        game_state: GameState,
    ) -> Result<GameState, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;
        room.game_state = game_state;
        Ok(room.game_state.clone())
    }

    async fn remove_participants_of(&self, owner: &SessionId) -> Vec<(RoomId, Vec<Participant>)> {
        let mut rooms = self.rooms.lock().await;
        let mut changed: Vec<(RoomId, Vec<Participant>)> = rooms
            .values_mut()
            .filter_map(|room| {
                room.remove_participants_of(owner)
                    .then(|| (room.id.clone(), room.participants.clone()))
            })
            .collect();
        changed.sort_by(|a, b| a.0.cmp(&b.0));
        changed
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        let mut list: Vec<Room> = rooms.values().cloned().collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        list
    }
}
