//! Доменная модель игры: карты, колода, монеты, ставки, игроки, настройки, рассадка.

pub mod bet;
pub mod card;
pub mod coins;
pub mod deck;
pub mod player;
pub mod roster;
pub mod settings;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type GameId = u64;

/// Индекс места за столом (0..player_count-1).
pub type SeatIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use bet::*;
pub use card::*;
pub use coins::*;
pub use deck::*;
pub use player::*;
pub use roster::*;
pub use settings::*;
