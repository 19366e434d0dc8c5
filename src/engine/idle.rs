//! Таймер бездействия человека.

use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

/// Через сколько секунд бездействия напоминаем человеку о ходе.
pub const IDLE_TIMEOUT_SECS: i32 = 10;

/// Состояние таймера текущего хода человека.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdleClock {
    /// Чей ход ждём (None – никого не ждём).
    pub seat: Option<SeatIndex>,
    /// Сколько секунд ещё до напоминания.
    pub remaining_secs: i32,
    /// Напоминание уже отправлено на этом ходу.
    pub fired: bool,
}

/// Результат "протекания" времени.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum IdleState {
    /// Время ещё есть.
    Ongoing,
    /// Время вышло только что – нужно напомнить.
    TimedOut(SeatIndex),
    /// Напоминание уже было, повторно не шлём.
    AlreadyFired,
    /// Никого не ждём.
    NoActiveSeat,
}

impl IdleClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начать ожидание хода для `seat`.
    pub fn start(&mut self, seat: SeatIndex) {
        self.seat = Some(seat);
        self.remaining_secs = IDLE_TIMEOUT_SECS;
        self.fired = false;
    }

    /// Человек сходил – таймер больше не нужен.
    pub fn clear(&mut self) {
        self.seat = None;
        self.remaining_secs = 0;
        self.fired = false;
    }

    /// Прошло `delta_secs` секунд.
    pub fn elapse(&mut self, delta_secs: i32) -> IdleState {
        let seat = match self.seat {
            Some(seat) => seat,
            None => return IdleState::NoActiveSeat,
        };
        if self.fired {
            return IdleState::AlreadyFired;
        }
        if delta_secs <= 0 {
            return IdleState::Ongoing;
        }

        self.remaining_secs -= delta_secs;
        if self.remaining_secs <= 0 {
            self.remaining_secs = 0;
            self.fired = true;
            IdleState::TimedOut(seat)
        } else {
            IdleState::Ongoing
        }
    }
}
