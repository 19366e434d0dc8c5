use crate::domain::settings::GameDifficulty;
use crate::strategy::{BettingStrategy, RandomPlusOneCap, StrategyKind};

/// Фабрика стратегий под конкретную цель по очкам.
#[derive(Clone, Copy, Debug)]
pub struct BettingStrategyFactory {
    goal_score: u32,
}

impl BettingStrategyFactory {
    pub fn new(goal_score: u32) -> Self {
        Self { goal_score }
    }

    fn make(&self, kind: StrategyKind) -> BettingStrategy {
        BettingStrategy::new(kind, self.goal_score)
    }

    pub fn manual(&self) -> BettingStrategy {
        BettingStrategy::manual()
    }

    pub fn total_random(&self) -> BettingStrategy {
        self.make(StrategyKind::TotalRandom)
    }

    pub fn random(&self) -> BettingStrategy {
        self.make(StrategyKind::Random)
    }

    pub fn plus_one(&self) -> BettingStrategy {
        self.make(StrategyKind::PlusOne)
    }

    pub fn highest_random_plus_one(&self) -> BettingStrategy {
        self.make(StrategyKind::RandomPlusOne(RandomPlusOneCap::Highest))
    }

    pub fn reasonable_random_plus_one(&self) -> BettingStrategy {
        self.make(StrategyKind::RandomPlusOne(RandomPlusOneCap::Reasonable))
    }

    pub fn conservative_random_plus_one(&self) -> BettingStrategy {
        self.make(StrategyKind::RandomPlusOne(RandomPlusOneCap::Conservative))
    }

    pub fn standard(&self, take_factor: f64) -> BettingStrategy {
        self.make(StrategyKind::Standard { take_factor })
    }

    pub fn high_standard(&self, min_card_value: u32, take_factor: f64) -> BettingStrategy {
        self.make(StrategyKind::HighStandard {
            min_card_value,
            take_factor,
        })
    }

    /// Пул AI-соперников (имя + стратегия) для уровня сложности.
    ///
    /// Ростер потом перемешивает пул и берёт первых `ai_player_count`.
    pub fn ai_pool(&self, difficulty: GameDifficulty) -> Vec<(&'static str, BettingStrategy)> {
        match difficulty {
            GameDifficulty::Easy => vec![
                ("John", self.plus_one()),
                ("Debbie", self.random()),
                ("Bart", self.total_random()),
                ("Meghan", self.conservative_random_plus_one()),
                ("Mike", self.standard(0.30)),
                ("Cedric", self.standard(0.25)),
            ],
            GameDifficulty::Medium => vec![
                ("Clair", self.standard(0.45)),
                ("Charlie", self.standard(0.50)),
                ("Lisa", self.standard(0.55)),
                ("Diana", self.standard(0.65)),
                ("Thomas", self.reasonable_random_plus_one()),
                ("Bob", self.highest_random_plus_one()),
            ],
            GameDifficulty::Hard => vec![
                ("Camila", self.standard(1.0)),
                ("Lucy", self.standard(0.95)),
                ("Bob", self.standard(0.85)),
                ("Thomas", self.standard(0.75)),
                ("Diana", self.high_standard(6, 0.9)),
                ("Lisa", self.high_standard(8, 1.0)),
            ],
        }
    }
}
