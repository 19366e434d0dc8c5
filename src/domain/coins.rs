use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество монет. Обёртка над u32, чтобы не путать с очками.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coins(pub u32);

impl Coins {
    pub const ZERO: Coins = Coins(0);

    pub fn new(amount: u32) -> Self {
        Coins(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    pub fn saturating_sub(self, other: Coins) -> Coins {
        Coins(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Coins {
    type Output = Coins;

    fn add(self, rhs: Coins) -> Self::Output {
        Coins(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Coins {
    fn add_assign(&mut self, rhs: Coins) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Coins {
    type Output = Coins;

    fn sub(self, rhs: Coins) -> Self::Output {
        Coins(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Coins {
    fn sub_assign(&mut self, rhs: Coins) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}
