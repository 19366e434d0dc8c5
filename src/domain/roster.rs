use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::settings::GameSettings;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::RandomSource;
use crate::strategy::BettingStrategyFactory;

/// Рассадка на одну игру: игроки по местам + кто ходит первым.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Roster {
    pub players: Vec<Player>,
    pub first_player: SeatIndex,
}

impl Roster {
    pub fn human_seat(&self) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.is_human)
    }
}

/// Создаёт игроков под настройки:
/// - AI занимают места 0..n, имена и стратегии берутся из перемешанного пула;
/// - человек садится на место n;
/// - первый игрок – 0 или случайный, если так сказано в настройках.
#[derive(Clone, Debug)]
pub struct RosterFactory {
    settings: GameSettings,
}

impl RosterFactory {
    pub fn new(settings: GameSettings) -> Self {
        Self { settings }
    }

    pub fn create_players<R: RandomSource>(&self, player_name: &str, rng: &mut R) -> Roster {
        let ai_count = self.settings.ai_player_count as usize;
        let factory = BettingStrategyFactory::new(self.settings.goal_score);

        let mut pool = factory.ai_pool(self.settings.game_difficulty);
        rng.shuffle(&mut pool);

        let mut players = Vec::with_capacity(ai_count + 1);
        for seat in 0..ai_count {
            let (name, strategy) = &pool[seat % pool.len()];
            // Пул короче, чем мест: повторяем имена с номером круга.
            // Имя человека AI не берёт, иначе у них общая запись в таблице лидеров.
            let mut lap = seat / pool.len();
            let name = loop {
                let candidate = if lap == 0 {
                    name.to_string()
                } else {
                    format!("{name} {}", lap + 1)
                };
                let taken = candidate == player_name
                    || players.iter().any(|p: &Player| p.name == candidate);
                if !taken {
                    break candidate;
                }
                lap += 1;
            };
            players.push(Player::new(
                seat as PlayerId,
                name,
                false,
                self.settings.starting_coins,
                self.settings.starting_points,
                strategy.clone(),
            ));
        }

        players.push(Player::new(
            ai_count as PlayerId,
            player_name,
            true,
            self.settings.starting_coins,
            self.settings.starting_points,
            factory.manual(),
        ));

        let first_player = if self.settings.randomize_first_player {
            rng.gen_range_inclusive(0, ai_count as u32) as SeatIndex
        } else {
            0
        };

        Roster {
            players,
            first_player,
        }
    }
}
