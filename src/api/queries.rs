use serde::{Deserialize, Serialize};

use crate::domain::GameId;
use crate::engine::{GameEngine, GameManager};
use crate::infra::mapping::{
    difficulty_to_api, leaderboard_to_dto, map_bet_input, map_player_to_dto,
};

use super::dto::{GameEndDto, GameViewDto, LeaderboardRowDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить состояние игры.
    GetGame { game_id: GameId },

    /// Все игры (для лобби).
    ListGames,

    /// Таблица лидеров.
    GetLeaderboard,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Game(GameViewDto),
    Games(Vec<GameViewDto>),
    Leaderboard(Vec<LeaderboardRowDto>),
}

/// Сформировать DTO игры по движку.
pub fn build_game_view(game_id: GameId, engine: &GameEngine) -> GameViewDto {
    let goal = engine.goal_score();

    let players = engine
        .players()
        .iter()
        .map(|p| map_player_to_dto(p, engine.roles(p.seat()), goal))
        .collect();

    let game_over = engine.game_end_state().map(|end| GameEndDto {
        winner_seat: end.winner.seat() as u8,
        winner_name: end.winner.name.clone(),
        human_won: end.winner.is_human,
        leaderboard: leaderboard_to_dto(&end.leaderboard),
    });

    GameViewDto {
        game_id,
        difficulty: difficulty_to_api(engine.settings().game_difficulty),
        goal_score: goal,
        round: engine.round_number(),
        started: engine.is_started(),
        card: engine.card(),
        players,
        current_seat: engine.current_seat() as u8,
        bet_input: engine.bet_input_constraints().map(map_bet_input),
        halted: engine.is_halted(),
        game_over,
    }
}

pub fn execute_query(manager: &GameManager, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetGame { game_id } => manager
            .game(game_id)
            .map(|engine| QueryResponse::Game(build_game_view(game_id, engine)))
            .ok_or(ApiError::GameNotFound(game_id)),

        Query::ListGames => {
            let games = manager
                .game_ids()
                .into_iter()
                .filter_map(|id| manager.game(id).map(|engine| build_game_view(id, engine)))
                .collect();
            Ok(QueryResponse::Games(games))
        }

        Query::GetLeaderboard => Ok(QueryResponse::Leaderboard(leaderboard_to_dto(
            manager.leaderboard(),
        ))),
    }
}
