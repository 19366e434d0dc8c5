//! Рейтинг игроков и таблица лидеров.
//!
//! Движок вызывает рейтинг ровно один раз в конце игры (`update_ratings`)
//! или при досрочном выходе человека (`penalize_exit`).

pub mod elo;
pub mod leaderboard;

use crate::domain::player::Player;

pub use elo::EloRatingSystem;
pub use leaderboard::{
    is_valid_name, DisplayRow, Leaderboard, LeaderboardError, PlayerStats, DEFAULT_RATING,
};

/// Внешний компонент рейтинга.
pub trait RatingSystem {
    /// Учесть завершённую игру. Возвращает обновлённую таблицу.
    fn update_ratings(&mut self, players: &[Player], winner: &Player) -> Leaderboard;

    /// Штраф человеку за выход из игры.
    fn penalize_exit(&mut self, human: &Player) -> Leaderboard;

    /// Текущая таблица без изменений.
    fn current(&self) -> Leaderboard;
}
