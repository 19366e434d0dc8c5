use serde::{Deserialize, Serialize};

use crate::domain::GameId;
use crate::engine::{BetRejection, EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Игра не найдена.
    GameNotFound(GameId),

    /// Игра с таким ID уже создана.
    GameExists(GameId),

    /// Ставка отклонена – состояние игры не изменилось, можно ставить снова.
    InvalidBet(BetRejection),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка.
    EngineError(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidBet(rejection) => ApiError::InvalidBet(rejection),
            EngineError::GameAlreadyStarted
            | EngineError::GameNotStarted
            | EngineError::GameOver
            | EngineError::NotHumansTurn(_) => ApiError::InvalidCommand(err.to_string()),
            EngineError::Internal(_) => ApiError::Internal(err.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::GameNotFound(id) => ApiError::GameNotFound(id),
            ManagerError::GameExists(id) => ApiError::GameExists(id),
            ManagerError::InvalidSettings(reason) => ApiError::BadRequest(reason.to_string()),
            ManagerError::Engine(e) => e.into(),
        }
    }
}
