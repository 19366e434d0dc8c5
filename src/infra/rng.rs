use crate::engine::RandomSource;

//
// NATIVE вариант (не wasm32): есть rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        slice.shuffle(&mut thread_rng());
    }

    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        use rand::Rng;

        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Детерминированный RNG для тестов, симулятора и реплея.
/// Один и тот же seed – одна и та же игра.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        use rand::Rng;

        if low >= high {
            return low;
        }
        self.inner.gen_range(low..=high)
    }
}

//
// WASM вариант (Linera контракт): без rand / getrandom.
//
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(target_arch = "wasm32")]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // Заглушка: колода не перемешивается, зато контракт детерминированный.
    }

    fn gen_range_inclusive(&mut self, low: u32, _high: u32) -> u32 {
        low
    }
}

/// RNG, который всегда выдаёт заранее заданные числа (по кругу) и не
/// перемешивает. Нужен, чтобы разыгрывать конкретные сценарии.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    /// Следующее число из сценария, зажатое в `[low, high]`.
    /// Пустой сценарий – всегда `low`.
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() || low >= high {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}
