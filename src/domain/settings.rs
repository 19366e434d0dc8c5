use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::coins::Coins;

/// Уровень сложности AI-соперников.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameDifficulty {
    Easy,
    Medium,
    Hard,
}

/// Ошибки загрузки/проверки настроек.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Не удалось прочитать файл настроек: {0}")]
    Io(#[from] std::io::Error),

    #[error("Битый JSON настроек: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Некорректные настройки: {0}")]
    Invalid(&'static str),
}

/// Неизменяемая конфигурация одной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    /// Стартовые монеты каждого игрока.
    pub starting_coins: Coins,
    /// Стартовые очки (обычно 0).
    pub starting_points: u32,
    /// Сколько копий каталога карт в колоде.
    pub num_of_card_decks: u32,
    /// Сколько мест занимают AI (человек всегда один).
    pub ai_player_count: u32,
    pub game_difficulty: GameDifficulty,
    /// Первый, кто набрал столько очков, выигрывает.
    pub goal_score: u32,
    /// Случайный первый игрок вместо места 0.
    pub randomize_first_player: bool,
}

impl GameSettings {
    pub fn for_difficulty(difficulty: GameDifficulty) -> Self {
        match difficulty {
            GameDifficulty::Easy => Self::easy(),
            GameDifficulty::Medium => Self::medium(),
            GameDifficulty::Hard => Self::hard(),
        }
    }

    pub fn easy() -> Self {
        Self {
            starting_coins: Coins(10),
            starting_points: 0,
            num_of_card_decks: 1,
            ai_player_count: 3,
            game_difficulty: GameDifficulty::Easy,
            goal_score: 30,
            randomize_first_player: false,
        }
    }

    pub fn medium() -> Self {
        Self {
            starting_coins: Coins(10),
            starting_points: 0,
            num_of_card_decks: 2,
            ai_player_count: 3,
            game_difficulty: GameDifficulty::Medium,
            goal_score: 30,
            randomize_first_player: false,
        }
    }

    pub fn hard() -> Self {
        Self {
            starting_coins: Coins(15),
            starting_points: 0,
            num_of_card_decks: 3,
            ai_player_count: 3,
            game_difficulty: GameDifficulty::Hard,
            goal_score: 40,
            randomize_first_player: false,
        }
    }

    /// Всего мест за столом: AI + человек.
    pub fn player_count(&self) -> usize {
        self.ai_player_count as usize + 1
    }

    /// Базовая проверка инвариантов конфигурации.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.num_of_card_decks == 0 {
            return Err(SettingsError::Invalid("нужна хотя бы одна колода"));
        }
        if self.ai_player_count == 0 {
            return Err(SettingsError::Invalid("нужен хотя бы один AI-соперник"));
        }
        if self.goal_score == 0 {
            return Err(SettingsError::Invalid("цель по очкам должна быть > 0"));
        }
        if self.starting_points >= self.goal_score {
            return Err(SettingsError::Invalid("стартовые очки уже достигают цели"));
        }
        Ok(())
    }

    /// Загрузить настройки из JSON-строки (внешний конфиг / сохранённые prefs).
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::medium()
    }
}
