use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Рейтинг нового игрока.
pub const DEFAULT_RATING: f64 = 1000.0;

const NAME_DELIMITER: char = ':';
const PLAYER_DELIMITER: &str = ";;";
const STAT_DELIMITER: char = ';';

/// Имя можно хранить в таблице как есть: не пустое и без разделителей.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains([NAME_DELIMITER, STAT_DELIMITER])
}

/// Ключ записи: разделители в имени заменяются на `_`, иначе строка таблицы не прочитается.
fn storage_key(name: &str) -> String {
    name.replace([NAME_DELIMITER, STAT_DELIMITER], "_")
}

/// Ошибки разбора сохранённой таблицы.
#[derive(Debug, Error, PartialEq)]
pub enum LeaderboardError {
    #[error("Нет разделителя имени в записи: {0}")]
    MissingName(String),

    #[error("Ожидалось 3 поля статистики, а запись: {0}")]
    BadStats(String),

    #[error("Не число в записи {record}: {field}")]
    BadNumber { record: String, field: String },
}

/// Статистика одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    pub rating: f64,
    pub total_games: u32,
    pub total_wins: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            total_games: 0,
            total_wins: 0,
        }
    }
}

impl PlayerStats {
    /// Формат `rating;games;wins`, рейтинг всегда с дробной частью: `1000.0`.
    pub fn serialize(&self) -> String {
        format!(
            "{:?}{STAT_DELIMITER}{}{STAT_DELIMITER}{}",
            self.rating, self.total_games, self.total_wins
        )
    }

    pub fn deserialize(raw: &str) -> Result<Self, LeaderboardError> {
        let parts: Vec<&str> = raw.split(STAT_DELIMITER).collect();
        if parts.len() != 3 {
            return Err(LeaderboardError::BadStats(raw.to_string()));
        }
        let bad = |field: &str| LeaderboardError::BadNumber {
            record: raw.to_string(),
            field: field.to_string(),
        };
        Ok(Self {
            rating: parts[0].parse().map_err(|_| bad(parts[0]))?,
            total_games: parts[1].parse().map_err(|_| bad(parts[1]))?,
            total_wins: parts[2].parse().map_err(|_| bad(parts[2]))?,
        })
    }
}

/// Строка таблицы для экрана лидеров.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayRow {
    pub name: String,
    pub rating: i64,
    pub games: u32,
    /// Процент побед, округлённый вниз.
    pub win_ratio: u32,
}

/// Таблица лидеров: имя -> статистика, в порядке добавления.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Leaderboard {
    stats: Vec<(String, PlayerStats)>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stats(stats: Vec<(String, PlayerStats)>) -> Self {
        Self { stats }
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn stats(&self, name: &str) -> Option<&PlayerStats> {
        let key = storage_key(name);
        self.stats.iter().find(|(n, _)| *n == key).map(|(_, s)| s)
    }

    /// Рейтинг игрока; неизвестный игрок получает рейтинг по умолчанию.
    pub fn player_rating(&self, name: &str) -> f64 {
        self.stats(name).map(|s| s.rating).unwrap_or(DEFAULT_RATING)
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        let mut rows: Vec<DisplayRow> = self
            .stats
            .iter()
            .map(|(name, s)| {
                let win_ratio = if s.total_games == 0 {
                    0
                } else {
                    s.total_wins * 100 / s.total_games
                };
                DisplayRow {
                    name: name.clone(),
                    rating: s.rating as i64,
                    games: s.total_games,
                    win_ratio,
                }
            })
            .collect();
        rows.sort_by(|a, b| b.rating.cmp(&a.rating));
        rows
    }

    pub fn update_loser_rating(&mut self, name: &str, delta: f64) {
        let stats = self.entry(name);
        stats.rating += delta;
        stats.total_games += 1;
    }

    pub fn update_winner_rating(&mut self, name: &str, delta: f64) {
        let stats = self.entry(name);
        stats.rating += delta;
        stats.total_games += 1;
        stats.total_wins += 1;
    }

    /// Изменить только рейтинг, без учёта сыгранной игры.
    pub fn update_rating(&mut self, name: &str, delta: f64) {
        self.entry(name).rating += delta;
    }

    fn entry(&mut self, name: &str) -> &mut PlayerStats {
        let key = storage_key(name);
        let idx = match self.stats.iter().position(|(n, _)| *n == key) {
            Some(idx) => idx,
            None => {
                self.stats.push((key, PlayerStats::default()));
                self.stats.len() - 1
            }
        };
        &mut self.stats[idx].1
    }

    /// `name:rating;games;wins;;` для каждого игрока подряд.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (name, stats) in &self.stats {
            out.push_str(name);
            out.push(NAME_DELIMITER);
            out.push_str(&stats.serialize());
            out.push_str(PLAYER_DELIMITER);
        }
        out
    }

    pub fn deserialize(raw: &str) -> Result<Self, LeaderboardError> {
        let mut stats = Vec::new();
        for segment in raw.split(PLAYER_DELIMITER).filter(|s| !s.is_empty()) {
            let (name, rest) = segment
                .split_once(NAME_DELIMITER)
                .ok_or_else(|| LeaderboardError::MissingName(segment.to_string()))?;
            stats.push((name.to_string(), PlayerStats::deserialize(rest)?));
        }
        Ok(Self { stats })
    }
}
