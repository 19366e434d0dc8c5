use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::coins::Coins;
use crate::domain::GameId;
use crate::engine::GameStatus;

use super::commands::{BetApi, DifficultyApi};

/// DTO игрока за столом. Роли раунда уже выведены из очерёдности.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerViewDto {
    pub seat_index: u8,
    pub name: String,
    pub is_human: bool,
    pub coins: Coins,
    pub score: u32,
    pub points_missing: u32,
    /// None – ещё не ходил в этом раунде.
    pub bet: Option<BetApi>,
    pub is_first_in_round: bool,
    pub is_current_player: bool,
    pub is_round_winner: bool,
}

/// Что можно ввести в поле ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetInputDto {
    pub min_bet: Coins,
    pub max_bet: Coins,
    /// false – доступен только Pass.
    pub can_bet: bool,
}

/// Строка таблицы лидеров.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardRowDto {
    pub name: String,
    pub rating: i64,
    pub games: u32,
    /// Процент побед.
    pub win_ratio: u32,
}

/// Итог игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEndDto {
    pub winner_seat: u8,
    pub winner_name: String,
    pub human_won: bool,
    pub leaderboard: Vec<LeaderboardRowDto>,
}

/// DTO игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameViewDto {
    pub game_id: GameId,
    pub difficulty: DifficultyApi,
    pub goal_score: u32,
    pub round: u32,
    pub started: bool,
    /// Карта текущего раунда.
    pub card: Option<Card>,
    pub players: Vec<PlayerViewDto>,
    pub current_seat: u8,
    /// Только когда ход человека.
    pub bet_input: Option<BetInputDto>,
    /// Игра остановлена из-за ошибки AI, ходы больше не принимаются.
    pub halted: bool,
    pub game_over: Option<GameEndDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Создана новая игра.
    GameCreated(GameViewDto),

    /// Игра идёт, ждём ставку человека.
    GameState(GameViewDto),

    /// Игра закончилась (`game_over` заполнен).
    GameFinished(GameViewDto),

    /// Человек вышел из игры.
    Exited {
        game_id: GameId,
        leaderboard: Vec<LeaderboardRowDto>,
    },
}

/// Помощник: статус движка -> ответ API.
pub fn map_status_to_response(status: GameStatus, view: GameViewDto) -> CommandResponse {
    match status {
        GameStatus::Finished { .. } => CommandResponse::GameFinished(view),
        GameStatus::NotStarted | GameStatus::AwaitingHuman { .. } | GameStatus::Halted => {
            CommandResponse::GameState(view)
        }
    }
}
