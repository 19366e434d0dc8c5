use linera_sdk::views::{linera_views, MapView, RegisterView, RootView, ViewStorageContext};
use serde::{Deserialize, Serialize};

use crate::api::CommandResponse;
use crate::domain::card::Card;
use crate::domain::deck::CardDeck;
use crate::domain::player::Player;
use crate::domain::settings::GameSettings;
use crate::domain::{GameId, SeatIndex};
use crate::engine::game_loop::{GameEndState, GameEngine};
use crate::engine::history::{GameHistory, RoundResult};
use crate::engine::idle::IdleClock;
use crate::engine::pacing::SpeedMode;
use crate::engine::sequencer::RoundSequencer;
use crate::rating::{EloRatingSystem, Leaderboard};

/// Снэпшот GameEngine, который можно хранить во View.
/// Это «замороженная» игра: всё, что нужно, чтобы восстановить GameEngine.
/// Уведомления и паузы не сохраняются – после восстановления они по умолчанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEngineSnapshot {
    pub settings: GameSettings,
    pub speed: SpeedMode,
    pub players: Vec<Player>,
    pub deck: CardDeck,
    pub card: Option<Card>,
    pub sequencer: RoundSequencer,
    pub human_seat: SeatIndex,
    pub round: u32,
    pub started: bool,
    pub halted: bool,
    pub game_end: Option<GameEndState>,
    pub history: GameHistory,
    pub rounds: Vec<RoundResult>,
    pub idle: IdleClock,
    /// Таблица лидеров, с которой работает рейтинг этой игры.
    pub leaderboard: Leaderboard,
}

impl GameEngineSnapshot {
    /// Упаковать живой GameEngine в снапшот для хранения on-chain.
    pub fn from_engine(engine: &GameEngine) -> Self {
        Self {
            settings: engine.settings.clone(),
            speed: engine.speed,
            players: engine.players.clone(),
            deck: engine.deck.clone(),
            card: engine.card,
            sequencer: engine.sequencer.clone(),
            human_seat: engine.human_seat,
            round: engine.round,
            started: engine.started,
            halted: engine.halted,
            game_end: engine.game_end.clone(),
            history: engine.history.clone(),
            rounds: engine.rounds.clone(),
            idle: engine.idle.clone(),
            leaderboard: engine.leaderboard(),
        }
    }

    /// Развернуть снапшот обратно в GameEngine (в памяти) с Elo-рейтингом.
    pub fn into_engine(self) -> GameEngine {
        let mut engine = GameEngine::restore(
            self.players,
            self.deck,
            self.settings,
            self.sequencer,
            Box::new(EloRatingSystem::new(self.leaderboard)),
        );
        engine.speed = self.speed;
        engine.card = self.card;
        engine.human_seat = self.human_seat;
        engine.round = self.round;
        engine.started = self.started;
        engine.halted = self.halted;
        engine.game_end = self.game_end;
        engine.history = self.history;
        engine.rounds = self.rounds;
        engine.idle = self.idle;
        engine
    }
}

/// Глобальное состояние приложения на Linera.
///
/// Важное:
/// - НЕ вкладываем RegisterView внутрь MapView.
/// - Для GameEngine используем GameEngineSnapshot.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct BidToWinState {
    /// Игры по GameId. None – игра удалена (человек вышел).
    #[view(map)]
    pub games: MapView<GameId, Option<GameEngineSnapshot>>,

    /// Таблица лидеров в формате `name:rating;games;wins;;`.
    #[view(register)]
    pub leaderboard: RegisterView<String>,

    /// Сколько всего игр создано (отсюда же следующий GameId).
    #[view(register)]
    pub total_games_created: RegisterView<u64>,

    /// Сколько игр доиграно до победителя.
    #[view(register)]
    pub total_games_finished: RegisterView<u64>,
}

/// Счётчики игр из state: сколько создано и сколько доиграно.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameCounters {
    pub created: u64,
    pub finished: u64,
}

impl GameCounters {
    /// Учесть успешный ответ на команду.
    pub fn record(&mut self, response: &CommandResponse) {
        match response {
            CommandResponse::GameCreated(_) => self.created += 1,
            CommandResponse::GameFinished(_) => self.finished += 1,
            CommandResponse::GameState(_) | CommandResponse::Exited { .. } => {}
        }
    }
}

impl BidToWinState {
    pub fn counters(&self) -> GameCounters {
        GameCounters {
            created: *self.total_games_created.get(),
            finished: *self.total_games_finished.get(),
        }
    }

    /// Обновить счётчики после выполненной команды.
    pub fn record_response(&mut self, response: &CommandResponse) {
        let mut counters = self.counters();
        counters.record(response);
        self.total_games_created.set(counters.created);
        self.total_games_finished.set(counters.finished);
    }
}
