//! エンティティ: Lottery（全体抽選）
//!
//! 登録済みの名前・当選者・除外名から抽選候補を計算します。
//! 一度当選した名前は二度と候補に戻りません。

use std::collections::BTreeSet;

use rand::Rng;

use super::{
    error::LotteryError,
    value_object::{PlayerName, SessionId},
};

/// 抽選に登録したユーザー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: SessionId,
    pub name: PlayerName,
}

/// 全体抽選の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lottery {
    users: Vec<User>,
    winners: Vec<PlayerName>,
    excluded: BTreeSet<PlayerName>,
}

impl Lottery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn winners(&self) -> &[PlayerName] {
        &self.winners
    }

    pub fn excluded(&self) -> impl Iterator<Item = &PlayerName> {
        self.excluded.iter()
    }

    /// 登録順の名前一覧
    pub fn user_names(&self) -> Vec<PlayerName> {
        self.users.iter().map(|u| u.name.clone()).collect()
    }

    /// ユーザーを登録（同名がいればエラー）
    pub fn register(&mut self, id: SessionId, name: PlayerName) -> Result<&User, LotteryError> {
        if self.users.iter().any(|u| u.name == name) {
            return Err(LotteryError::DuplicateName(name.into_string()));
        }
        self.users.push(User { id, name });
        Ok(&self.users[self.users.len() - 1])
    }

    /// 抽選候補: 登録者 − 当選者 − 除外名
    pub fn candidates(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| !self.winners.contains(&u.name) && !self.excluded.contains(&u.name))
            .collect()
    }

    /// 候補から一様ランダムに 1 名を選び、当選者に追加
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<PlayerName, LotteryError> {
        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(LotteryError::NoCandidates);
        }
        let index = rng.random_range(0..candidates.len());
        let winner = candidates[index].name.clone();
        self.winners.push(winner.clone());
        Ok(winner)
    }

    /// 除外名の切り替え。切り替え後に除外されていれば true
    pub fn toggle_exclude(&mut self, name: PlayerName) -> bool {
        if self.excluded.remove(&name) {
            false
        } else {
            self.excluded.insert(name);
            true
        }
    }

    /// 全体を初期状態に置き換える
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn name(value: &str) -> PlayerName {
        PlayerName::new(value).unwrap()
    }

    fn session(value: &str) -> SessionId {
        SessionId::new(value.to_string()).unwrap()
    }

    fn lottery_with(names: &[&str]) -> Lottery {
        let mut lottery = Lottery::new();
        for (i, n) in names.iter().enumerate() {
            lottery.register(session(&format!("s{i}")), name(n)).unwrap();
        }
        lottery
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        // テスト項目: 同じ名前の二重登録はエラーになり、名簿は変わらない
        // given (前提条件):
        let mut lottery = lottery_with(&["A"]);

        // when (操作):
        let result = lottery.register(session("s9"), name(" A ")).cloned();

        // then (期待する結果):
        assert_eq!(result, Err(LotteryError::DuplicateName("A".to_string())));
        assert_eq!(lottery.user_names(), vec![name("A")]);
    }

    #[test]
    fn test_register_is_case_sensitive() {
        // テスト項目: 大文字小文字が異なる名前は別人として登録できる
        // given (前提条件):
        let mut lottery = lottery_with(&["alice"]);

        // when (操作):
        let result = lottery.register(session("s9"), name("Alice")).cloned();

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(lottery.users().len(), 2);
    }

    #[test]
    fn test_draw_picks_only_remaining_candidate() {
        // テスト項目: 登録 [A,B,C]、当選 [A]、除外 [B] のとき必ず C が選ばれる
        // given (前提条件):
        let mut lottery = lottery_with(&["A", "B", "C"]);
        lottery.winners.push(name("A"));
        lottery.toggle_exclude(name("B"));
        let mut rng = StdRng::seed_from_u64(7);

        // when (操作):
        let winner = lottery.draw(&mut rng);

        // then (期待する結果):
        assert_eq!(winner, Ok(name("C")));
        assert_eq!(lottery.winners(), &[name("A"), name("C")]);
    }

    #[test]
    fn test_draw_exhausts_pool_monotonically() {
        // テスト項目: 抽選のたびに候補が 1 ずつ減り、同じ名前は二度当選しない
        // given (前提条件):
        let mut lottery = lottery_with(&["A", "B", "C", "D", "E"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut drawn = Vec::new();

        // when (操作):
        while !lottery.candidates().is_empty() {
            let before = lottery.candidates().len();
            let winner = lottery.draw(&mut rng).unwrap();
            assert_eq!(lottery.candidates().len(), before - 1);
            assert!(!drawn.contains(&winner));
            drawn.push(winner);
        }

        // then (期待する結果):
        assert_eq!(drawn.len(), 5);
        assert_eq!(lottery.draw(&mut rng), Err(LotteryError::NoCandidates));
    }

    #[test]
    fn test_draw_on_empty_pool_leaves_winners_unchanged() {
        // テスト項目: 候補が空なら NoCandidates を返し、当選者は変わらない
        // given (前提条件):
        let mut lottery = Lottery::new();
        let mut rng = StdRng::seed_from_u64(1);

        // when (操作):
        let result = lottery.draw(&mut rng);

        // then (期待する結果):
        assert_eq!(result, Err(LotteryError::NoCandidates));
        assert!(lottery.winners().is_empty());
    }

    #[test]
    fn test_toggle_exclude_twice_restores_pool() {
        // テスト項目: 除外を 2 回切り替えると元の候補に戻る
        // given (前提条件):
        let mut lottery = lottery_with(&["A", "B"]);

        // when (操作):
        let first = lottery.toggle_exclude(name("A"));
        let pool_while_excluded = lottery.candidates().len();
        let second = lottery.toggle_exclude(name("A"));

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(pool_while_excluded, 1);
        assert_eq!(lottery.candidates().len(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        // テスト項目: reset で登録者・当選者・除外名がすべて消える
        // given (前提条件):
        let mut lottery = lottery_with(&["A", "B"]);
        lottery.toggle_exclude(name("B"));
        lottery.draw(&mut StdRng::seed_from_u64(3)).unwrap();

        // when (操作):
        lottery.reset();

        // then (期待する結果):
        assert_eq!(lottery, Lottery::new());
    }
}
