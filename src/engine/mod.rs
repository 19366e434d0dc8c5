//! Движок игры "ставка на карту": раунды, ставки, подсчёт победителя.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `start_game` – открыть первую карту и отыграть AI до хода человека
//!   - `place_bet_for_human_player` – ставка человека, затем снова AI
//!   - `penalize_exit` – штраф за выход посреди игры

pub mod errors;
pub mod game_loop;
pub mod game_manager;
pub mod history;
pub mod idle;
pub mod notify;
pub mod pacing;
pub mod sequencer;
pub mod validation;

pub use errors::{BetRejection, EngineError};
pub use game_loop::{round_winner, GameEndState, GameEngine, GameStatus, SeatRoles};
pub use game_manager::{GameManager, ManagerError};
pub use history::{GameEvent, GameEventKind, GameHistory, RoundResult};
pub use idle::{IdleClock, IdleState, IDLE_TIMEOUT_SECS};
pub use notify::{CueRecorder, GameNotifier, NoOpNotifier, SoundCue};
pub use pacing::{Pacer, SpeedMode, ThreadSleepPacer, ACTION_DELAY_MS};
pub use sequencer::RoundSequencer;
pub use validation::{bet_input_constraints, BetInputConstraints};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртка над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерное целое в `[low, high]`. При `low >= high` возвращает `low`.
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32;
}
