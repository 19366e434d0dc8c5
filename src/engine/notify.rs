//! Уведомления наружу (звук, UI). Fire-and-forget: движок не ждёт и не
//! зависит от результата.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::card::Card;
use crate::domain::SeatIndex;

/// Приёмник событий игры. Все методы по умолчанию ничего не делают.
pub trait GameNotifier {
    fn card_drawn(&mut self, _card: Card) {}

    fn ai_bet_placed(&mut self, _seat: SeatIndex, _bet: Bet) {}

    /// `had_choice` – false, если человек не мог перебить ставку и Pass вынужденный.
    fn human_bet_placed(&mut self, _seat: SeatIndex, _bet: Bet, _had_choice: bool) {}

    fn round_won(&mut self, _seat: SeatIndex, _is_human: bool, _points: u32) {}

    fn game_over(&mut self, _winner: SeatIndex, _is_human: bool) {}

    /// Ход перешёл к человеку.
    fn idling(&mut self, _seat: SeatIndex) {}

    /// Человек слишком долго думает.
    fn idle_timeout(&mut self, _seat: SeatIndex) {}

    /// Любое изменение наблюдаемого состояния (ростер, карта, конец игры).
    fn state_changed(&mut self) {}
}

/// Ничего не делает. Для тестов и обучения.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifier;

impl GameNotifier for NoOpNotifier {}

/// Звуковая реакция на событие.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoundCue {
    DrawCard,
    BetLittle,
    BetHigh,
    OpponentPass,
    Pass,
    PassNoChoice,
    RoundWin,
    RoundWinBigCard,
    RoundLoss,
    RoundLossBigCard,
    GameWin,
    GameLoss,
    Idle,
}

/// Ставка меньше этого числа монет – "маленькая".
const LITTLE_BET_LIMIT: u32 = 3;
/// Карта от этого номинала – "крупная".
const BIG_CARD_POINTS: u32 = 10;

impl SoundCue {
    pub fn for_bet(bet: Bet) -> SoundCue {
        if bet.amount().0 < LITTLE_BET_LIMIT {
            SoundCue::BetLittle
        } else {
            SoundCue::BetHigh
        }
    }

    pub fn for_round(is_human: bool, points: u32) -> SoundCue {
        let big = points >= BIG_CARD_POINTS;
        match (is_human, big) {
            (true, true) => SoundCue::RoundWinBigCard,
            (true, false) => SoundCue::RoundWin,
            (false, true) => SoundCue::RoundLossBigCard,
            (false, false) => SoundCue::RoundLoss,
        }
    }
}

/// Переводит события в `SoundCue` и складывает их в общий буфер.
///
/// Буфер разделяемый: ручку можно оставить у себя, а сам recorder отдать движку.
#[derive(Clone, Debug, Default)]
pub struct CueRecorder {
    cues: Arc<Mutex<Vec<SoundCue>>>,
}

impl CueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Снимок записанных реакций.
    pub fn cues(&self) -> Vec<SoundCue> {
        self.cues.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn push(&self, cue: SoundCue) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}

impl GameNotifier for CueRecorder {
    fn card_drawn(&mut self, _card: Card) {
        self.push(SoundCue::DrawCard);
    }

    fn ai_bet_placed(&mut self, _seat: SeatIndex, bet: Bet) {
        let cue = match bet {
            Bet::Pass => SoundCue::OpponentPass,
            Bet::Coins(_) => SoundCue::for_bet(bet),
        };
        self.push(cue);
    }

    fn human_bet_placed(&mut self, _seat: SeatIndex, bet: Bet, had_choice: bool) {
        let cue = match bet {
            Bet::Pass if had_choice => SoundCue::Pass,
            Bet::Pass => SoundCue::PassNoChoice,
            Bet::Coins(_) => SoundCue::for_bet(bet),
        };
        self.push(cue);
    }

    fn round_won(&mut self, _seat: SeatIndex, is_human: bool, points: u32) {
        self.push(SoundCue::for_round(is_human, points));
    }

    fn game_over(&mut self, _winner: SeatIndex, is_human: bool) {
        self.push(if is_human {
            SoundCue::GameWin
        } else {
            SoundCue::GameLoss
        });
    }

    fn idle_timeout(&mut self, _seat: SeatIndex) {
        self.push(SoundCue::Idle);
    }
}
