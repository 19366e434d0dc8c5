use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::GameId;

/// Генерация ID игр на монотонном счётчике.
///
/// В Linera-контракте ID берётся из `total_games_created` в state,
/// а этот генератор – для симулятора и тестов.
#[derive(Debug)]
pub struct IdGenerator {
    game_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Первый ID = 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Продолжить нумерацию (например, после загрузки из хранилища).
    pub fn starting_at(first: GameId) -> Self {
        Self {
            game_counter: AtomicU64::new(first),
        }
    }

    #[inline]
    pub fn next_game_id(&self) -> GameId {
        self.game_counter.fetch_add(1, Ordering::Relaxed)
    }
}
