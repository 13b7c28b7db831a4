//! UseCase: 抽選状態の取得

use std::sync::Arc;

use crate::domain::{Lottery, LotteryRepository};

/// 抽選状態取得のユースケース
pub struct GetLotteryUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LotteryRepository>,
}

impl GetLotteryUseCase {
    /// 新しい GetLotteryUseCase を作成
    pub fn new(repository: Arc<dyn LotteryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Lottery {
        self.repository.snapshot().await
    }
}
