use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::engine::RandomSource;

/// Колода для одной игры: N перемешанных копий каталога.
///
/// Колода неисчерпаема: когда карты кончились, перед следующей выдачей
/// она заново набирается из N копий каталога и перемешивается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDeck {
    pub num_of_decks: u32,
    pub cards: Vec<Card>,
}

impl CardDeck {
    /// Новая перемешанная колода из `num_of_decks` копий каталога.
    pub fn new<R: RandomSource>(num_of_decks: u32, rng: &mut R) -> Self {
        let mut deck = Self {
            num_of_decks,
            cards: Vec::new(),
        };
        deck.refill(rng);
        deck
    }

    /// Неперемешанный набор карт: каталог A..K, повторённый N раз.
    pub fn catalog_copies(num_of_decks: u32) -> Vec<Card> {
        let mut cards = Vec::with_capacity(Card::ALL.len() * num_of_decks as usize);
        for _ in 0..num_of_decks {
            cards.extend_from_slice(&Card::ALL);
        }
        cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять карту сверху. Пустая колода сначала перезаполняется.
    pub fn draw_card<R: RandomSource>(&mut self, rng: &mut R) -> Card {
        if self.cards.is_empty() {
            self.refill(rng);
        }
        // refill всегда кладёт минимум один каталог, так что pop здесь не пустой.
        self.cards.pop().unwrap_or(Card::Ace)
    }

    fn refill<R: RandomSource>(&mut self, rng: &mut R) {
        let mut fresh = Self::catalog_copies(self.num_of_decks.max(1));
        rng.shuffle(&mut fresh);
        self.cards = fresh;
    }
}
