use tracing::info;

use crate::domain::player::Player;
use crate::rating::leaderboard::Leaderboard;
use crate::rating::RatingSystem;

const WINNER_K_FACTOR: f64 = 10.0;
const LOSER_K_FACTOR: f64 = 3.0 * WINNER_K_FACTOR;
const EXIT_PENALTY: f64 = -10.0;

/// Elo-подобный рейтинг поверх таблицы лидеров.
///
/// Победитель играет "матч" с каждым проигравшим: проигравший теряет
/// `30 * P(проигравший)`, победителю суммируется `10 * (1 - P(победитель))`.
#[derive(Clone, Debug, Default)]
pub struct EloRatingSystem {
    leaderboard: Leaderboard,
}

impl EloRatingSystem {
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self { leaderboard }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    fn rating(&self, player: &Player) -> f64 {
        self.leaderboard.player_rating(&player.name)
    }
}

/// Вероятность победы игрока над соперником.
pub fn win_probability(rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - rating) / 400.0))
}

/// (дельта победителя, дельта проигравшего) для одной пары.
pub fn rating_deltas(winner_rating: f64, loser_rating: f64) -> (f64, f64) {
    let winner_p = win_probability(winner_rating, loser_rating);
    let loser_p = win_probability(loser_rating, winner_rating);
    (
        WINNER_K_FACTOR * (1.0 - winner_p),
        LOSER_K_FACTOR * (0.0 - loser_p),
    )
}

impl RatingSystem for EloRatingSystem {
    fn update_ratings(&mut self, players: &[Player], winner: &Player) -> Leaderboard {
        let winner_rating = self.rating(winner);
        let mut winner_total = 0.0;

        for player in players.iter().filter(|p| p.id != winner.id) {
            let (winner_delta, loser_delta) = rating_deltas(winner_rating, self.rating(player));
            self.leaderboard.update_loser_rating(&player.name, loser_delta);
            winner_total += winner_delta;
        }
        self.leaderboard.update_winner_rating(&winner.name, winner_total);

        info!(winner = %winner.name, delta = winner_total, "ratings updated");
        self.leaderboard.clone()
    }

    fn penalize_exit(&mut self, human: &Player) -> Leaderboard {
        self.leaderboard.update_loser_rating(&human.name, EXIT_PENALTY);
        info!(player = %human.name, penalty = EXIT_PENALTY, "exit penalized");
        self.leaderboard.clone()
    }

    fn current(&self) -> Leaderboard {
        self.leaderboard.clone()
    }
}
