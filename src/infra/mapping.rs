use crate::api::dto::{BetInputDto, LeaderboardRowDto, PlayerViewDto};
use crate::api::{BetApi, DifficultyApi};
use crate::domain::bet::Bet;
use crate::domain::player::Player;
use crate::domain::settings::GameDifficulty;
use crate::engine::{BetInputConstraints, SeatRoles};
use crate::rating::Leaderboard;

/// Маппинг сложности между API и domain.
pub fn difficulty_from_api(api: DifficultyApi) -> GameDifficulty {
    match api {
        DifficultyApi::Easy => GameDifficulty::Easy,
        DifficultyApi::Medium => GameDifficulty::Medium,
        DifficultyApi::Hard => GameDifficulty::Hard,
    }
}

pub fn difficulty_to_api(domain: GameDifficulty) -> DifficultyApi {
    match domain {
        GameDifficulty::Easy => DifficultyApi::Easy,
        GameDifficulty::Medium => DifficultyApi::Medium,
        GameDifficulty::Hard => DifficultyApi::Hard,
    }
}

/// `Coins(0)` проходит как есть – движок отклонит его как `ZeroCoins`.
pub fn bet_from_api(api: BetApi) -> Bet {
    match api {
        BetApi::Pass => Bet::Pass,
        BetApi::Coins(n) => Bet::coins(n),
    }
}

pub fn bet_to_api(domain: Bet) -> BetApi {
    match domain {
        Bet::Pass => BetApi::Pass,
        Bet::Coins(amount) => BetApi::Coins(amount.0),
    }
}

pub fn map_player_to_dto(player: &Player, roles: SeatRoles, goal_score: u32) -> PlayerViewDto {
    PlayerViewDto {
        seat_index: player.seat() as u8,
        name: player.name.clone(),
        is_human: player.is_human,
        coins: player.coins,
        score: player.score,
        points_missing: player.points_missing(goal_score),
        bet: player.bet.map(bet_to_api),
        is_first_in_round: roles.is_first_in_round,
        is_current_player: roles.is_current_player,
        is_round_winner: roles.is_round_winner,
    }
}

pub fn map_bet_input(constraints: BetInputConstraints) -> BetInputDto {
    BetInputDto {
        min_bet: constraints.min_bet,
        max_bet: constraints.max_bet,
        can_bet: constraints.can_bet,
    }
}

/// Таблица лидеров для экрана: по убыванию рейтинга.
pub fn leaderboard_to_dto(leaderboard: &Leaderboard) -> Vec<LeaderboardRowDto> {
    leaderboard
        .display_rows()
        .into_iter()
        .map(|row| LeaderboardRowDto {
            name: row.name,
            rating: row.rating,
            games: row.games,
            win_ratio: row.win_ratio,
        })
        .collect()
}
