use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::coins::Coins;
use crate::domain::{PlayerId, SeatIndex};
use crate::strategy::BettingStrategy;

/// Игрок за столом (одно место). Человек или AI.
///
/// Роли в ходе раунда (первый, текущий, победитель) здесь не хранятся –
/// их держит `RoundSequencer`, а наружу они выводятся при чтении.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Player {
    /// Стабильный идентификатор = индекс места.
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
    /// Текущие монеты (никогда не уходят в минус).
    pub coins: Coins,
    /// Очки. За игру только растут.
    pub score: u32,
    /// Ставка в текущем раунде. None – игрок ещё не ходил.
    pub bet: Option<Bet>,
    /// Стратегия ставок. У человека – Manual.
    pub strategy: BettingStrategy,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        is_human: bool,
        coins: Coins,
        score: u32,
        strategy: BettingStrategy,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            is_human,
            coins,
            score,
            bet: None,
            strategy,
        }
    }

    pub fn seat(&self) -> SeatIndex {
        self.id as SeatIndex
    }

    pub fn has_acted(&self) -> bool {
        self.bet.is_some()
    }

    /// Сколько очков не хватает до цели.
    pub fn points_missing(&self, goal_score: u32) -> u32 {
        goal_score.saturating_sub(self.score)
    }
}
