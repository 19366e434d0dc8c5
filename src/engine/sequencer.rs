use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

/// Очерёдность ходов по кругу.
///
/// Держит только индексы: первый игрок раунда, текущий игрок и победитель
/// последнего раунда. Раунд завершён, когда следующий по кругу – снова первый.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSequencer {
    player_count: usize,
    first_player: SeatIndex,
    current_player: SeatIndex,
    round_winner: Option<SeatIndex>,
}

impl RoundSequencer {
    /// Начальное состояние: первый = текущий = 0, победителя нет.
    pub fn initial(player_count: usize) -> Self {
        Self::starting_at(player_count, 0)
    }

    /// Начать с заданного первого игрока (индекс берётся по модулю).
    pub fn starting_at(player_count: usize, first_player: SeatIndex) -> Self {
        let count = player_count.max(1);
        let first = first_player % count;
        Self {
            player_count: count,
            first_player: first,
            current_player: first,
            round_winner: None,
        }
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn first_player(&self) -> SeatIndex {
        self.first_player
    }

    pub fn current_player(&self) -> SeatIndex {
        self.current_player
    }

    pub fn round_winner(&self) -> Option<SeatIndex> {
        self.round_winner
    }

    pub fn set_round_winner(&mut self, seat: SeatIndex) {
        self.round_winner = Some(seat);
    }

    /// Передать ход следующему месту. Возвращает новый текущий индекс.
    pub fn advance_to_next_player(&mut self) -> SeatIndex {
        self.current_player = self.next(self.current_player);
        self.current_player
    }

    /// Все ли уже сходили: следующий по кругу – снова первый.
    pub fn have_all_players_acted(&self) -> bool {
        self.next(self.current_player) == self.first_player
    }

    /// Новый раунд: первым становится место через одно после текущего.
    /// Сбрасывает победителя. Возвращает новый индекс первого игрока.
    pub fn advance_to_next_round(&mut self) -> SeatIndex {
        let new_first = self.next(self.next(self.current_player));
        self.first_player = new_first;
        self.current_player = new_first;
        self.round_winner = None;
        new_first
    }

    fn next(&self, seat: SeatIndex) -> SeatIndex {
        (seat + 1) % self.player_count
    }
}
