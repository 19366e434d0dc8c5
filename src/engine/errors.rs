use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Coins, SeatIndex};

/// Почему ставка человека отклонена. Состояние при этом не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetRejection {
    /// Ставка 0 монет – для этого есть Pass.
    ZeroCoins,
    /// Ставка больше, чем монет у игрока.
    OverBudget { bet: Coins, available: Coins },
    /// Ставка не перебивает текущую максимальную (шаг – 1 монета).
    BelowMinimum { bet: Coins, minimum: Coins },
}

/// Ошибки движка игры.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Ставка отклонена: {0:?}")]
    InvalidBet(BetRejection),

    #[error("В рассадке нет места человека")]
    MissingHumanSeat,

    #[error("Слишком мало игроков: {0}")]
    NotEnoughPlayers(usize),

    #[error("Игра уже запущена")]
    GameAlreadyStarted,

    #[error("Игра ещё не запущена")]
    GameNotStarted,

    #[error("Игра уже закончена")]
    GameOver,

    #[error("Сейчас не ход человека (ходит место {0})")]
    NotHumansTurn(SeatIndex),

    #[error("AI на месте {seat} поставил {bet} при {available} монетах")]
    AiBetOverBudget {
        seat: SeatIndex,
        bet: Coins,
        available: Coins,
    },

    #[error("Нет ни одной ставки монетами – победителя раунда нет")]
    NoBetsPlaced,

    #[error("Движок остановлен после нарушения инварианта")]
    Halted,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
