//! Главный модуль приложения "ставка на карту" на Linera.
//!
//! Игра: каждый раунд открывается карта (A..K = 1..13 очков), игроки по кругу
//! ставят монеты или пасуют, максимальная ставка забирает карту. Кто первым
//! набрал цель по очкам – победил.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим BidToWinState.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod rating;
pub mod state;
pub mod strategy;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, CommandResponse, Query, QueryResponse};
use crate::state::BidToWinState;

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BidToWinOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera. Пока не нужны.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BidToWinMessage {}

/// Запросы к сервису (read-only).
pub type BidToWinQuery = Query;

/// Ответы на запросы.
pub type BidToWinResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct BidToWinAbi;

impl ContractAbi for BidToWinAbi {
    type Operation = BidToWinOperation;
    type Response = Option<CommandResponse>;
}

impl ServiceAbi for BidToWinAbi {
    type Query = BidToWinQuery;
    type QueryResponse = BidToWinResponse;
}

/// Тип состояния для contract.rs и service.rs.
pub type Storage = BidToWinState;
