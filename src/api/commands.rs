use serde::{Deserialize, Serialize};

use crate::domain::settings::GameSettings;
use crate::domain::GameId;
use crate::engine::{GameManager, GameStatus, RandomSource};
use crate::infra::mapping::{bet_from_api, difficulty_from_api, leaderboard_to_dto};
use crate::rating::is_valid_name;

use super::dto::{map_status_to_response, CommandResponse, GameViewDto};
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`BidToWinOperation`),
/// которые Linera экспонирует наружу в виде GraphQL mutations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новую игру.
    CreateGame(CreateGameCommand),

    /// Операция над конкретной игрой.
    GameCommand(GameCommand),
}

/// Внешнее представление сложности (API-слой).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DifficultyApi {
    Easy,
    Medium,
    Hard,
}

/// Внешнее представление ставки (API-слой).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetApi {
    Pass,
    Coins(u32),
}

/// Команда создания игры.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateGameCommand {
    pub game_id: GameId,
    /// Имя человека (оно же ключ в таблице лидеров).
    pub player_name: String,
    /// Пресет по сложности.
    pub difficulty: DifficultyApi,
    /// Полные настройки вместо пресета (сложность тогда берётся отсюда).
    pub custom_settings: Option<GameSettings>,
    pub randomize_first_player: bool,
}

impl CreateGameCommand {
    /// Итоговые настройки игры.
    pub fn settings(&self) -> GameSettings {
        let mut settings = self
            .custom_settings
            .clone()
            .unwrap_or_else(|| GameSettings::for_difficulty(difficulty_from_api(self.difficulty)));
        settings.randomize_first_player |= self.randomize_first_player;
        settings
    }
}

/// Команды, которые относятся к существующей игре.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameCommand {
    /// Открыть первую карту и отыграть AI до хода человека.
    StartGame { game_id: GameId },

    /// Ставка человека.
    PlaceBet(PlaceBetCommand),

    /// Выход посреди игры (штраф к рейтингу).
    ExitGame { game_id: GameId },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceBetCommand {
    pub game_id: GameId,
    pub bet: BetApi,
}

/// Выполнить команду над менеджером игр.
pub fn execute_command<R: RandomSource>(
    manager: &mut GameManager,
    command: Command,
    rng: &mut R,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateGame(cmd) => {
            if cmd.player_name.trim().is_empty() {
                return Err(ApiError::BadRequest("пустое имя игрока".into()));
            }
            if !is_valid_name(&cmd.player_name) {
                return Err(ApiError::BadRequest("имя не должно содержать ':' и ';'".into()));
            }
            let settings = cmd.settings();
            manager.create_game(cmd.game_id, settings, cmd.player_name.trim(), rng)?;
            let view = game_view(manager, cmd.game_id)?;
            Ok(CommandResponse::GameCreated(view))
        }

        Command::GameCommand(GameCommand::StartGame { game_id }) => {
            let status = manager.start_game(game_id, rng)?;
            respond(manager, game_id, status)
        }

        Command::GameCommand(GameCommand::PlaceBet(cmd)) => {
            let status = manager.place_bet(cmd.game_id, bet_from_api(cmd.bet), rng)?;
            respond(manager, cmd.game_id, status)
        }

        Command::GameCommand(GameCommand::ExitGame { game_id }) => {
            let leaderboard = manager.exit_game(game_id)?;
            Ok(CommandResponse::Exited {
                game_id,
                leaderboard: leaderboard_to_dto(&leaderboard),
            })
        }
    }
}

fn respond(
    manager: &GameManager,
    game_id: GameId,
    status: GameStatus,
) -> Result<CommandResponse, ApiError> {
    let view = game_view(manager, game_id)?;
    Ok(map_status_to_response(status, view))
}

fn game_view(manager: &GameManager, game_id: GameId) -> Result<GameViewDto, ApiError> {
    manager
        .game(game_id)
        .map(|engine| build_game_view(game_id, engine))
        .ok_or(ApiError::GameNotFound(game_id))
}
