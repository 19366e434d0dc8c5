use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::coins::Coins;
use crate::domain::player::Player;

/// Решение игрока на текущую карту.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Bet {
    /// Игрок отказывается от карты.
    Pass,
    /// Ставка монетами. Сумма всегда > 0 и не больше монет игрока.
    Coins(Coins),
}

impl Bet {
    pub fn coins(amount: u32) -> Self {
        Bet::Coins(Coins(amount))
    }

    /// Сколько монет стоит ставка (Pass = 0).
    pub fn amount(&self) -> Coins {
        match self {
            Bet::Pass => Coins::ZERO,
            Bet::Coins(c) => *c,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Bet::Pass)
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bet::Pass => write!(f, "pass"),
            Bet::Coins(c) => write!(f, "{c} coins"),
        }
    }
}

/// Максимальная ставка монетами среди всех игроков (0, если ставок нет).
pub fn highest_bet_in_coins(players: &[Player]) -> Coins {
    players
        .iter()
        .filter_map(|p| p.bet.map(|b| b.amount()))
        .max()
        .unwrap_or(Coins::ZERO)
}
