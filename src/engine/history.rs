use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::card::Card;
use crate::domain::coins::Coins;
use crate::domain::SeatIndex;

/// Тип события в игре.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Игра началась.
    GameStarted {
        player_count: usize,
        first_player: SeatIndex,
    },

    /// Открыта новая карта раунда.
    CardDrawn { round: u32, card: Card },

    /// Игрок сделал ставку или спасовал.
    BetPlaced {
        seat: SeatIndex,
        bet: Bet,
        coins_before: Coins,
    },

    /// Раунд выигран: победитель заплатил ставку и получил очки.
    RoundWon {
        round: u32,
        seat: SeatIndex,
        paid: Coins,
        points: u32,
    },

    /// Все спасовали – раунд без победителя.
    RoundPassed { round: u32 },

    /// Утешительная монета всем, кто не выиграл раунд.
    ConsolationPaid { seats: Vec<SeatIndex> },

    /// Новый раунд и новый первый игрок.
    NextRound { round: u32, first_player: SeatIndex },

    /// Игра закончена.
    GameFinished { winner: SeatIndex, final_score: u32 },

    /// Человек вышел посреди игры и получил штраф к рейтингу.
    ExitPenalized { seat: SeatIndex },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история игры.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }
}

/// Итог одного раунда – короткая запись для лога/обучения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    pub card: Card,
    /// None – все спасовали.
    pub winner: Option<SeatIndex>,
    pub winning_bet: Coins,
}

impl RoundResult {
    pub fn card_value(&self) -> u32 {
        self.card.points()
    }
}
