use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Базовая пауза между действиями.
pub const ACTION_DELAY_MS: u64 = 1000;

/// Темп игры. Чисто косметика – на исход игры не влияет.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpeedMode {
    /// Без пауз (обучение, тесты, симулятор).
    Instantaneous,
    #[default]
    Normal,
    /// Паузы вдвое короче.
    Fast,
}

impl SpeedMode {
    pub fn delay(self) -> Option<Duration> {
        match self {
            SpeedMode::Instantaneous => None,
            SpeedMode::Normal => Some(Duration::from_millis(ACTION_DELAY_MS)),
            SpeedMode::Fast => Some(Duration::from_millis(ACTION_DELAY_MS / 2)),
        }
    }
}

/// Пауза "на подумать" между ходами.
pub trait Pacer {
    fn pause(&mut self, speed: SpeedMode);
}

/// Блокирующая пауза текущего потока.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleepPacer;

impl Pacer for ThreadSleepPacer {
    fn pause(&mut self, speed: SpeedMode) {
        if let Some(delay) = speed.delay() {
            std::thread::sleep(delay);
        }
    }
}
