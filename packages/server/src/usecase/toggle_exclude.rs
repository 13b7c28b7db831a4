//! UseCase: 除外名の切り替え
//!
//! 除外名は登録されていない名前でも保持できます。通知は行いません。

use std::sync::Arc;

use crate::domain::{LotteryRepository, PlayerName};

use super::error::RelayError;

/// 除外切り替えのユースケース
pub struct ToggleExcludeUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LotteryRepository>,
}

impl ToggleExcludeUseCase {
    /// 新しい ToggleExcludeUseCase を作成
    pub fn new(repository: Arc<dyn LotteryRepository>) -> Self {
        Self { repository }
    }

    /// 除外を切り替え、切り替え後に除外されていれば true を返す
    pub async fn execute(&self, name: &str) -> Result<bool, RelayError> {
        let name = PlayerName::new(name)?;
        let excluded = self.repository.toggle_exclude(name.clone()).await;
        tracing::info!(
            "'{}' is now {}",
            name,
            if excluded { "excluded" } else { "eligible" }
        );
        Ok(excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::ValueObjectError,
        usecase::test_support::{create_test_lottery_repository, session},
    };

    #[tokio::test]
    async fn test_toggle_twice_restores_pool() {
        // テスト項目: 同じ名前を 2 回切り替えると候補が元に戻る
        // given (前提条件):
        let repository = create_test_lottery_repository();
        repository
            .register(session("s1"), PlayerName::new("A").unwrap())
            .await
            .unwrap();
        let usecase = ToggleExcludeUseCase::new(repository.clone());

        // when (操作):
        let first = usecase.execute("A").await.unwrap();
        let pool_while_excluded = repository.snapshot().await.candidates().len();
        let second = usecase.execute("A").await.unwrap();

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(pool_while_excluded, 0);
        assert_eq!(repository.snapshot().await.candidates().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_blank_name_is_rejected() {
        // テスト項目: 空白のみの名前はエラーになる
        // given (前提条件):
        let usecase = ToggleExcludeUseCase::new(create_test_lottery_repository());

        // when (操作):
        let result = usecase.execute("  ").await;

        // then (期待する結果):
        assert_eq!(result, Err(RelayError::InvalidInput(ValueObjectError::Empty("name"))));
    }
}
