//! Инфраструктурный слой вокруг движка:
//! - генерация ID игр;
//! - RNG-реализации для движка;
//! - абстракция хранения (off-chain / тесты);
//! - маппинги между API и domain.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;

pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
