//! Стратегии ставок AI.
//!
//! Набор стратегий закрытый, поэтому это enum, а не trait-объекты.
//! Контракт один: `generate_bet(card_points, players, me, rng) -> Bet`.
//! Все стратегии, кроме Manual, сначала проверяют "летальную" ставку:
//! если эта карта сама по себе доводит игрока до цели и у него монет больше,
//! чем текущая максимальная ставка, – ставится всё.

pub mod factory;

use serde::{Deserialize, Serialize};

use crate::domain::bet::{highest_bet_in_coins, Bet};
use crate::domain::coins::Coins;
use crate::domain::player::Player;
use crate::engine::RandomSource;

pub use factory::BettingStrategyFactory;

/// Верхняя граница случайной первой ставки у семейства RandomPlusOne.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RandomPlusOneCap {
    /// До всех монет.
    Highest,
    /// До 3/4 монет.
    Reasonable,
    /// До половины монет.
    Conservative,
}

impl RandomPlusOneCap {
    pub fn random_until(self, coins: u32) -> u32 {
        match self {
            RandomPlusOneCap::Highest => coins,
            RandomPlusOneCap::Reasonable => 3 * coins / 4,
            RandomPlusOneCap::Conservative => coins / 2,
        }
    }
}

/// Вид стратегии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum StrategyKind {
    /// Всегда Pass. Для человека: реальную ставку даёт UI.
    Manual,
    /// Ставит highest + 1, если хватает монет.
    PlusOne,
    /// Случайная ставка в [highest + 1, coins].
    TotalRandom,
    /// То же, что TotalRandom; отдельный вариант оставлен ради ростера.
    Random,
    /// Первая ставка раунда – случайная до cap, дальше highest + 1.
    RandomPlusOne(RandomPlusOneCap),
    /// Ставит "справедливую" цену карты: ceil(points * take_factor).
    Standard { take_factor: f64 },
    /// Standard, но не берёт карты дешевле `min_card_value`.
    HighStandard { min_card_value: u32, take_factor: f64 },
}

/// Стратегия, привязанная к цели по очкам конкретной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BettingStrategy {
    pub kind: StrategyKind,
    pub goal_score: u32,
}

impl BettingStrategy {
    pub fn new(kind: StrategyKind, goal_score: u32) -> Self {
        Self { kind, goal_score }
    }

    pub fn manual() -> Self {
        Self::new(StrategyKind::Manual, 0)
    }

    pub fn is_manual(&self) -> bool {
        matches!(self.kind, StrategyKind::Manual)
    }

    /// Решить, что ставить на карту стоимостью `card_points`.
    ///
    /// `players` – весь стол (включая `me`), `me` – тот, кто сейчас ходит.
    pub fn generate_bet<R: RandomSource>(
        &self,
        card_points: u32,
        players: &[Player],
        me: &Player,
        rng: &mut R,
    ) -> Bet {
        if self.is_manual() {
            return Bet::Pass;
        }

        let highest = highest_bet_in_coins(players).0;

        if let Some(lethal) = self.lethal_bet(card_points, highest, me) {
            return lethal;
        }

        match &self.kind {
            StrategyKind::Manual => Bet::Pass,
            StrategyKind::PlusOne => plus_one(highest, me.coins.0),
            StrategyKind::TotalRandom | StrategyKind::Random => {
                total_random(highest, me.coins.0, rng)
            }
            StrategyKind::RandomPlusOne(cap) => random_plus_one(*cap, highest, me.coins.0, rng),
            StrategyKind::Standard { take_factor } => {
                standard(*take_factor, card_points, highest, players, me)
            }
            StrategyKind::HighStandard {
                min_card_value,
                take_factor,
            } => {
                if card_points < *min_card_value {
                    Bet::Pass
                } else {
                    standard(*take_factor, card_points, highest, players, me)
                }
            }
        }
    }

    /// Ставка "ва-банк", если эта карта выигрывает игру.
    fn lethal_bet(&self, card_points: u32, highest: u32, me: &Player) -> Option<Bet> {
        let wins_game = card_points.saturating_add(me.score) >= self.goal_score;
        if wins_game && me.coins.0 > highest {
            Some(Bet::Coins(me.coins))
        } else {
            None
        }
    }
}

fn plus_one(highest: u32, coins: u32) -> Bet {
    let required = highest + 1;
    if required <= coins {
        Bet::coins(required)
    } else {
        Bet::Pass
    }
}

fn total_random<R: RandomSource>(highest: u32, coins: u32, rng: &mut R) -> Bet {
    let lowest = highest + 1;
    if lowest <= coins {
        Bet::coins(rng.gen_range_inclusive(lowest, coins))
    } else {
        Bet::Pass
    }
}

fn random_plus_one<R: RandomSource>(
    cap: RandomPlusOneCap,
    highest: u32,
    coins: u32,
    rng: &mut R,
) -> Bet {
    if coins == 0 {
        return Bet::Pass;
    }
    if highest == 0 {
        // Первая ставка раунда: [1, cap], но не меньше 1 и не больше монет.
        let until = cap.random_until(coins).clamp(1, coins);
        return Bet::coins(rng.gen_range_inclusive(1, until));
    }
    plus_one(highest, coins)
}

fn standard(
    take_factor: f64,
    card_points: u32,
    highest: u32,
    players: &[Player],
    me: &Player,
) -> Bet {
    let coins = me.coins.0;
    let ideal_bet = ideal_bet(card_points, take_factor);

    if highest == 0 {
        let bet = ideal_bet.min(coins);
        return if bet > 0 { Bet::coins(bet) } else { Bet::Pass };
    }

    let required = highest + 1;
    if required > ideal_bet || required > coins {
        return Bet::Pass;
    }

    // Кто ещё не ходил и может перебить – ставим сразу больше, вплоть до ideal.
    let preempt = players
        .iter()
        .filter(|p| p.id != me.id && p.bet.is_none() && p.coins.0 > required + 1)
        .map(|p| p.coins.0.min(coins.min(ideal_bet)))
        .max();

    Bet::Coins(Coins(preempt.unwrap_or(required)))
}

/// ceil(points * take_factor), не меньше нуля.
pub fn ideal_bet(card_points: u32, take_factor: f64) -> u32 {
    let raw = (card_points as f64 * take_factor).ceil();
    if raw <= 0.0 {
        0
    } else {
        raw as u32
    }
}
