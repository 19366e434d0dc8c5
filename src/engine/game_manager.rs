// src/engine/game_manager.rs

use std::collections::HashMap;

use thiserror::Error;
use tracing::info;

use crate::domain::bet::Bet;
use crate::domain::settings::{GameSettings, SettingsError};
use crate::domain::GameId;
use crate::engine::pacing::SpeedMode;
use crate::engine::{EngineError, GameEngine, GameStatus, RandomSource};
use crate::rating::{EloRatingSystem, Leaderboard};

/// Ошибки уровня менеджера игр (над движком одной игры).
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Игра {0} не найдена")]
    GameNotFound(GameId),

    #[error("Игра {0} уже существует")]
    GameExists(GameId),

    #[error("Некорректные настройки: {0}")]
    InvalidSettings(&'static str),

    /// Проброшенная ошибка из движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Менеджер игр:
/// - хранит несколько игр по GameId;
/// - держит общую таблицу лидеров и отдаёт её копию каждой новой игре;
/// - забирает обновлённую таблицу, когда игра заканчивается или человек выходит.
pub struct GameManager {
    games: HashMap<GameId, GameEngine>,
    leaderboard: Leaderboard,
    speed: SpeedMode,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new(Leaderboard::new())
    }
}

impl GameManager {
    /// Пустой менеджер. Паузы по умолчанию выключены.
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self {
            games: HashMap::new(),
            leaderboard,
            speed: SpeedMode::Instantaneous,
        }
    }

    pub fn with_speed(mut self, speed: SpeedMode) -> Self {
        self.speed = speed;
        self
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn has_game(&self, game_id: GameId) -> bool {
        self.games.contains_key(&game_id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// ID игр по возрастанию.
    pub fn game_ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn game(&self, game_id: GameId) -> Option<&GameEngine> {
        self.games.get(&game_id)
    }

    pub fn game_mut(&mut self, game_id: GameId) -> Option<&mut GameEngine> {
        self.games.get_mut(&game_id)
    }

    /// Создать новую игру под `game_id`. ID генерируется снаружи.
    pub fn create_game<R: RandomSource>(
        &mut self,
        game_id: GameId,
        settings: GameSettings,
        player_name: &str,
        rng: &mut R,
    ) -> Result<(), ManagerError> {
        if self.games.contains_key(&game_id) {
            return Err(ManagerError::GameExists(game_id));
        }
        settings.validate().map_err(|e| match e {
            SettingsError::Invalid(reason) => ManagerError::InvalidSettings(reason),
            _ => ManagerError::InvalidSettings("настройки не читаются"),
        })?;

        let rating = Box::new(EloRatingSystem::new(self.leaderboard.clone()));
        let engine =
            GameEngine::for_settings(settings, player_name, rating, rng)?.with_speed(self.speed);

        info!(game_id, player = player_name, "game created");
        self.games.insert(game_id, engine);
        Ok(())
    }

    /// Положить уже собранный движок (например, восстановленный из снапшота).
    pub fn insert_game(&mut self, game_id: GameId, engine: GameEngine) {
        self.games.insert(game_id, engine);
    }

    pub fn remove_game(&mut self, game_id: GameId) -> Option<GameEngine> {
        self.games.remove(&game_id)
    }

    pub fn start_game<R: RandomSource>(
        &mut self,
        game_id: GameId,
        rng: &mut R,
    ) -> Result<GameStatus, ManagerError> {
        let engine = self
            .games
            .get_mut(&game_id)
            .ok_or(ManagerError::GameNotFound(game_id))?;

        let status = engine.start_game(rng)?;
        self.collect_leaderboard(game_id);
        Ok(status)
    }

    /// Ставка человека в конкретной игре.
    pub fn place_bet<R: RandomSource>(
        &mut self,
        game_id: GameId,
        bet: Bet,
        rng: &mut R,
    ) -> Result<GameStatus, ManagerError> {
        let engine = self
            .games
            .get_mut(&game_id)
            .ok_or(ManagerError::GameNotFound(game_id))?;

        let status = engine.place_bet_for_human_player(bet, rng)?;
        self.collect_leaderboard(game_id);
        Ok(status)
    }

    /// Человек вышел: штраф к рейтингу, игра удаляется.
    pub fn exit_game(&mut self, game_id: GameId) -> Result<Leaderboard, ManagerError> {
        let mut engine = self
            .games
            .remove(&game_id)
            .ok_or(ManagerError::GameNotFound(game_id))?;

        // Доигранная игра уже учтена в рейтинге – штраф не нужен.
        if !engine.is_over() {
            self.leaderboard = engine.penalize_exit()?;
            info!(game_id, "human left the game");
        }
        Ok(self.leaderboard.clone())
    }

    /// Если игра закончилась – её таблица становится общей.
    fn collect_leaderboard(&mut self, game_id: GameId) {
        if let Some(end) = self.games.get(&game_id).and_then(|e| e.game_end_state()) {
            self.leaderboard = end.leaderboard.clone();
        }
    }
}
