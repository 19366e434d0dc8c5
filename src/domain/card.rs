use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Карта игры. Масти нет – важен только номинал, он же количество очков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Card {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Card {
    /// Каталог карт: A..K, ровно одна копия каждого номинала.
    pub const ALL: [Card; 13] = [
        Card::Ace,
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
        Card::Jack,
        Card::Queen,
        Card::King,
    ];

    /// Сколько очков приносит карта (1..=13).
    pub const fn points(self) -> u32 {
        self as u32
    }

    /// Подпись карты для фронта: "A", "2".."10", "J", "Q", "K".
    pub const fn label(self) -> &'static str {
        match self {
            Card::Ace => "A",
            Card::Two => "2",
            Card::Three => "3",
            Card::Four => "4",
            Card::Five => "5",
            Card::Six => "6",
            Card::Seven => "7",
            Card::Eight => "8",
            Card::Nine => "9",
            Card::Ten => "10",
            Card::Jack => "J",
            Card::Queen => "Q",
            Card::King => "K",
        }
    }

    /// Ключ картинки, которую рисует UI.
    pub fn image_key(self) -> String {
        format!("img/{}.png", self.label())
    }

    pub fn from_points(points: u32) -> Option<Card> {
        Card::ALL.iter().copied().find(|c| c.points() == points)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Парсинг подписи: "A", "7", "10", "J", "q", "k".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let card = match trimmed {
            "A" | "a" | "1" => Card::Ace,
            "J" | "j" | "11" => Card::Jack,
            "Q" | "q" | "12" => Card::Queen,
            "K" | "k" | "13" => Card::King,
            other => {
                let points: u32 = other
                    .parse()
                    .map_err(|_| format!("Invalid card label: {other}"))?;
                Card::from_points(points).ok_or_else(|| format!("Invalid card label: {other}"))?
            }
        };
        Ok(card)
    }
}
