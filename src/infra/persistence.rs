use std::collections::HashMap;

use crate::domain::settings::GameSettings;
use crate::domain::GameId;
use crate::rating::{Leaderboard, LeaderboardError};
use crate::state::GameEngineSnapshot;

/// Абстракция хранилища игры.
///
/// В Linera-режиме вместо этого используется `BidToWinState` и Views,
/// но эта абстракция удобна для тестов и оффчейн-запуска (симулятор).
/// Таблица лидеров хранится строкой в формате `name:rating;games;wins;;`.
pub trait GameStorage {
    fn load_leaderboard_raw(&self) -> Option<String>;

    fn save_leaderboard_raw(&mut self, raw: String);

    /// Имя человека из прошлой сессии.
    fn load_player_name(&self) -> Option<String>;

    fn save_player_name(&mut self, name: &str);

    fn load_settings(&self) -> Option<GameSettings>;

    fn save_settings(&mut self, settings: &GameSettings);

    /// Загрузить незаконченную игру.
    fn load_game(&self, id: GameId) -> Option<GameEngineSnapshot>;

    /// Сохранить / очистить игру.
    fn save_game(&mut self, id: GameId, snapshot: Option<GameEngineSnapshot>);
}

/// Таблица лидеров из хранилища. Пустое хранилище – пустая таблица.
pub fn load_leaderboard(storage: &impl GameStorage) -> Result<Leaderboard, LeaderboardError> {
    match storage.load_leaderboard_raw() {
        Some(raw) => Leaderboard::deserialize(&raw),
        None => Ok(Leaderboard::new()),
    }
}

pub fn save_leaderboard(storage: &mut impl GameStorage, leaderboard: &Leaderboard) {
    storage.save_leaderboard_raw(leaderboard.serialize());
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryGameStorage {
    leaderboard: Option<String>,
    player_name: Option<String>,
    settings: Option<GameSettings>,
    games: HashMap<GameId, GameEngineSnapshot>,
}

impl InMemoryGameStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStorage for InMemoryGameStorage {
    fn load_leaderboard_raw(&self) -> Option<String> {
        self.leaderboard.clone()
    }

    fn save_leaderboard_raw(&mut self, raw: String) {
        self.leaderboard = Some(raw);
    }

    fn load_player_name(&self) -> Option<String> {
        self.player_name.clone()
    }

    fn save_player_name(&mut self, name: &str) {
        self.player_name = Some(name.to_string());
    }

    fn load_settings(&self) -> Option<GameSettings> {
        self.settings.clone()
    }

    fn save_settings(&mut self, settings: &GameSettings) {
        self.settings = Some(settings.clone());
    }

    fn load_game(&self, id: GameId) -> Option<GameEngineSnapshot> {
        self.games.get(&id).cloned()
    }

    fn save_game(&mut self, id: GameId, snapshot: Option<GameEngineSnapshot>) {
        if let Some(s) = snapshot {
            self.games.insert(id, s);
        } else {
            self.games.remove(&id);
        }
    }
}
