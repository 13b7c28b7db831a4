//! InMemory Lottery Repository 実装
//!
//! 抽選状態と乱数源を 1 つの `Mutex` にまとめて保持します。
//! 抽選は非暗号学的な疑似乱数による一様選択です。

use async_trait::async_trait;
use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::Mutex;

use crate::domain::{Lottery, LotteryError, LotteryRepository, PlayerName, SessionId};

struct LotteryState {
    lottery: Lottery,
    rng: StdRng,
}

/// インメモリ Lottery Repository 実装
pub struct InMemoryLotteryRepository {
    state: Mutex<LotteryState>,
}

impl InMemoryLotteryRepository {
    /// OS の乱数でシードした InMemoryLotteryRepository を作成
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// 固定シードで作成（テストや再現用）
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(LotteryState {
                lottery: Lottery::new(),
                rng,
            }),
        }
    }
}

impl Default for InMemoryLotteryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LotteryRepository for InMemoryLotteryRepository {
    async fn snapshot(&self) -> Lottery {
        self.state.lock().await.lottery.clone()
    }

    async fn register(
        &self,
        session_id: SessionId,
        name: PlayerName,
    ) -> Result<Vec<PlayerName>, LotteryError> {
        let mut state = self.state.lock().await;
        state.lottery.register(session_id, name)?;
        Ok(state.lottery.user_names())
    }

    async fn draw(&self) -> Result<PlayerName, LotteryError> {
        let mut state = self.state.lock().await;
        let LotteryState { lottery, rng } = &mut *state;
        lottery.draw(rng)
    }

    async fn reset(&self) {
        self.state.lock().await.lottery.reset();
    }

    async fn toggle_exclude(&self, name: PlayerName) -> bool {
        self.state.lock().await.lottery.toggle_exclude(name)
    }
}
