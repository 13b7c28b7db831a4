//! UseCase: ルーム詳細の取得

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository};

use super::error::GetRoomDetailError;

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomDetailUseCase {
    /// 新しい GetRoomDetailUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルームを取得（存在しない場合は作成せずにエラー）
    pub async fn execute(&self, room_id: String) -> Result<Room, GetRoomDetailError> {
        let room_id = RoomId::new(room_id).map_err(GetRoomDetailError::InvalidRoomId)?;
        self.repository
            .find(&room_id)
            .await
            .ok_or_else(|| GetRoomDetailError::RoomNotFound(room_id.into_string()))
    }
}
