use serde::{Deserialize, Serialize};

use crate::domain::bet::{highest_bet_in_coins, Bet};
use crate::domain::coins::Coins;
use crate::domain::player::Player;
use crate::engine::errors::{BetRejection, EngineError};

/// Что UI может предложить человеку: диапазон ставки и можно ли ставить вообще.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetInputConstraints {
    /// Минимальная ставка = текущая максимальная + 1.
    pub min_bet: Coins,
    /// Максимальная ставка = все монеты игрока.
    pub max_bet: Coins,
    /// false – остаётся только Pass.
    pub can_bet: bool,
}

pub fn bet_input_constraints(player: &Player, players: &[Player]) -> BetInputConstraints {
    let min_bet = highest_bet_in_coins(players) + Coins(1);
    let max_bet = player.coins;
    BetInputConstraints {
        min_bet,
        max_bet,
        can_bet: min_bet <= max_bet,
    }
}

/// Проверка на границе записи ставки: нельзя поставить больше, чем есть.
pub fn check_budget(player: &Player, bet: &Bet) -> Result<(), BetRejection> {
    match bet {
        Bet::Pass => Ok(()),
        Bet::Coins(amount) if amount.is_zero() => Err(BetRejection::ZeroCoins),
        Bet::Coins(amount) if *amount > player.coins => Err(BetRejection::OverBudget {
            bet: *amount,
            available: player.coins,
        }),
        Bet::Coins(_) => Ok(()),
    }
}

/// Полная проверка ставки, пришедшей из UI.
///
/// Pass допустим всегда. Ставка монетами должна перебивать текущую
/// максимальную хотя бы на 1 и укладываться в бюджет.
pub fn validate_human_bet(
    player: &Player,
    bet: &Bet,
    players: &[Player],
) -> Result<(), EngineError> {
    check_budget(player, bet).map_err(EngineError::InvalidBet)?;

    if let Bet::Coins(amount) = bet {
        let minimum = highest_bet_in_coins(players) + Coins(1);
        if *amount < minimum {
            return Err(EngineError::InvalidBet(BetRejection::BelowMinimum {
                bet: *amount,
                minimum,
            }));
        }
    }

    Ok(())
}
