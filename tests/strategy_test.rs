//! Стратегии AI: политика каждой стратегии и "летальная" ставка.

use bid_to_win_engine::domain::{bet::Bet, coins::Coins, player::Player, settings::GameDifficulty};
use bid_to_win_engine::infra::ScriptedRng;
use bid_to_win_engine::strategy::{
    ideal_bet, BettingStrategy, BettingStrategyFactory, RandomPlusOneCap, StrategyKind,
};

const GOAL: u32 = 30;

fn factory() -> BettingStrategyFactory {
    BettingStrategyFactory::new(GOAL)
}

fn seat(id: u64, coins: u32, score: u32, bet: Option<Bet>) -> Player {
    let mut p = Player::new(
        id,
        format!("P{id}"),
        false,
        Coins(coins),
        score,
        BettingStrategy::manual(),
    );
    p.bet = bet;
    p
}

/// Стол, где ходит место 0, а у остальных – заданные ставки.
fn table(me: Player, others: Vec<Player>) -> Vec<Player> {
    let mut players = vec![me];
    players.extend(others);
    players
}

fn bet_for(strategy: &BettingStrategy, card: u32, players: &[Player], rng: &mut ScriptedRng) -> Bet {
    strategy.generate_bet(card, players, &players[0], rng)
}

//
// Летальная ставка
//
#[test]
fn lethal_card_forces_all_in_for_every_ai_strategy() {
    // coins=5, score=25, goal=30, карта 6: 6 >= 5 и 5 > highest(0).
    let me = seat(0, 5, 25, None);
    let players = table(me, vec![seat(1, 10, 0, Some(Bet::Pass)), seat(2, 10, 0, None)]);

    let f = factory();
    let strategies = vec![
        f.plus_one(),
        f.total_random(),
        f.random(),
        f.highest_random_plus_one(),
        f.reasonable_random_plus_one(),
        f.conservative_random_plus_one(),
        f.standard(0.25),
        f.high_standard(8, 1.0),
    ];

    for s in strategies {
        let mut rng = ScriptedRng::new(vec![1]);
        assert_eq!(
            bet_for(&s, 6, &players, &mut rng),
            Bet::coins(5),
            "{:?} must go all in",
            s.kind
        );
    }
}

#[test]
fn lethal_rule_needs_coins_above_highest_bet() {
    // Ставка 5 уже есть – перебить нечем, правило не срабатывает.
    let me = seat(0, 5, 25, None);
    let players = table(me, vec![seat(1, 10, 0, Some(Bet::coins(5)))]);

    let mut rng = ScriptedRng::default();
    assert_eq!(bet_for(&factory().plus_one(), 6, &players, &mut rng), Bet::Pass);
}

#[test]
fn lethal_rule_ignored_when_card_does_not_reach_goal() {
    let me = seat(0, 5, 25, None);
    let players = table(me, vec![seat(1, 10, 0, None)]);

    // 4 < 30 - 25: обычный PlusOne – ставит 1.
    let mut rng = ScriptedRng::default();
    assert_eq!(bet_for(&factory().plus_one(), 4, &players, &mut rng), Bet::coins(1));
}

#[test]
fn manual_strategy_always_passes() {
    let me = seat(0, 5, 29, None);
    let players = table(me, vec![]);
    let mut rng = ScriptedRng::default();
    assert_eq!(bet_for(&BettingStrategy::manual(), 13, &players, &mut rng), Bet::Pass);
}

//
// PlusOne
//
#[test]
fn plus_one_bets_one_above_highest_if_affordable() {
    let mut rng = ScriptedRng::default();
    let s = factory().plus_one();

    let players = table(seat(0, 10, 0, None), vec![seat(1, 10, 0, Some(Bet::coins(3)))]);
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::coins(4));

    let players = table(seat(0, 10, 0, None), vec![seat(1, 12, 0, Some(Bet::coins(10)))]);
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::Pass);

    let broke = table(seat(0, 0, 0, None), vec![]);
    assert_eq!(bet_for(&s, 5, &broke, &mut rng), Bet::Pass);
}

//
// TotalRandom / Random
//
#[test]
fn total_random_stays_within_range() {
    let s = factory().total_random();
    let players = table(seat(0, 10, 0, None), vec![seat(1, 10, 0, Some(Bet::coins(3)))]);

    let mut rng = ScriptedRng::new(vec![7]);
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::coins(7));

    // Вне диапазона – зажимается в [4, 10].
    let mut rng = ScriptedRng::new(vec![1]);
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::coins(4));
    let mut rng = ScriptedRng::new(vec![50]);
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::coins(10));
}

#[test]
fn random_passes_when_it_cannot_outbid() {
    let s = factory().random();
    let players = table(seat(0, 4, 0, None), vec![seat(1, 10, 0, Some(Bet::coins(4)))]);
    let mut rng = ScriptedRng::new(vec![4]);
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::Pass);
}

//
// RandomPlusOne
//
#[test]
fn random_plus_one_caps_first_bet() {
    assert_eq!(RandomPlusOneCap::Highest.random_until(10), 10);
    assert_eq!(RandomPlusOneCap::Reasonable.random_until(10), 7);
    assert_eq!(RandomPlusOneCap::Conservative.random_until(10), 5);

    let players = table(seat(0, 10, 0, None), vec![seat(1, 10, 0, None)]);

    let mut rng = ScriptedRng::new(vec![9]);
    let conservative = factory().conservative_random_plus_one();
    assert_eq!(bet_for(&conservative, 5, &players, &mut rng), Bet::coins(5));

    let mut rng = ScriptedRng::new(vec![9]);
    let highest = factory().highest_random_plus_one();
    assert_eq!(bet_for(&highest, 5, &players, &mut rng), Bet::coins(9));
}

#[test]
fn random_plus_one_first_bet_is_at_least_one_coin() {
    // Conservative от 1 монеты = 0, но ставка не меньше 1.
    let players = table(seat(0, 1, 0, None), vec![seat(1, 10, 0, Some(Bet::Pass))]);
    let mut rng = ScriptedRng::new(vec![3]);
    let s = factory().conservative_random_plus_one();
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::coins(1));

    let broke = table(seat(0, 0, 0, None), vec![]);
    assert_eq!(bet_for(&s, 5, &broke, &mut rng), Bet::Pass);
}

#[test]
fn random_plus_one_follows_with_plus_one() {
    let players = table(seat(0, 10, 0, None), vec![seat(1, 10, 0, Some(Bet::coins(2)))]);
    let mut rng = ScriptedRng::new(vec![9]);
    let s = factory().reasonable_random_plus_one();
    assert_eq!(bet_for(&s, 5, &players, &mut rng), Bet::coins(3));
}

//
// Standard / HighStandard
//
#[test]
fn ideal_bet_rounds_up() {
    assert_eq!(ideal_bet(10, 0.5), 5);
    assert_eq!(ideal_bet(7, 0.5), 4);
    assert_eq!(ideal_bet(13, 1.0), 13);
    assert_eq!(ideal_bet(1, 0.25), 1);
    assert_eq!(ideal_bet(5, 0.0), 0);
}

#[test]
fn standard_opens_with_ideal_bet_capped_by_coins() {
    let s = factory().standard(0.5);
    let mut rng = ScriptedRng::default();

    let rich = table(seat(0, 10, 0, None), vec![seat(1, 10, 0, None)]);
    assert_eq!(bet_for(&s, 10, &rich, &mut rng), Bet::coins(5));

    let poor = table(seat(0, 3, 0, None), vec![seat(1, 10, 0, None)]);
    assert_eq!(bet_for(&s, 10, &poor, &mut rng), Bet::coins(3));

    let broke = table(seat(0, 0, 0, None), vec![seat(1, 10, 0, None)]);
    assert_eq!(bet_for(&s, 10, &broke, &mut rng), Bet::Pass);
}

#[test]
fn standard_takes_required_bet_when_nobody_can_outbid() {
    let s = factory().standard(0.5);
    let mut rng = ScriptedRng::default();

    // Все уже сходили – просто highest + 1.
    let players = table(
        seat(0, 10, 0, None),
        vec![seat(1, 10, 0, Some(Bet::coins(2))), seat(2, 10, 0, Some(Bet::Pass))],
    );
    assert_eq!(bet_for(&s, 10, &players, &mut rng), Bet::coins(3));

    // Несходивший соперник беден (coins <= required + 1) – тоже highest + 1.
    let players = table(
        seat(0, 10, 0, None),
        vec![seat(1, 10, 0, Some(Bet::coins(2))), seat(2, 4, 0, None)],
    );
    assert_eq!(bet_for(&s, 10, &players, &mut rng), Bet::coins(3));
}

#[test]
fn standard_preempts_undecided_rivals_up_to_ideal() {
    let s = factory().standard(0.5);
    let mut rng = ScriptedRng::default();

    let players = table(
        seat(0, 10, 0, None),
        vec![seat(1, 10, 0, Some(Bet::coins(2))), seat(2, 10, 0, None)],
    );
    // ideal = 5, соперник с 10 монетами ещё не ходил.
    assert_eq!(bet_for(&s, 10, &players, &mut rng), Bet::coins(5));

    // ideal = 10, у несходившего соперника 6 монет: min(6, 10, 10).
    let greedy = factory().standard(1.0);
    let players = table(
        seat(0, 10, 0, None),
        vec![seat(1, 10, 0, Some(Bet::coins(2))), seat(2, 6, 0, None)],
    );
    assert_eq!(bet_for(&greedy, 10, &players, &mut rng), Bet::coins(6));
}

#[test]
fn standard_passes_above_ideal() {
    let s = factory().standard(0.5);
    let mut rng = ScriptedRng::default();
    let players = table(seat(0, 10, 0, None), vec![seat(1, 10, 0, Some(Bet::coins(5)))]);
    assert_eq!(bet_for(&s, 10, &players, &mut rng), Bet::Pass);
}

#[test]
fn high_standard_skips_cheap_cards() {
    let s = factory().high_standard(8, 1.0);
    let mut rng = ScriptedRng::default();
    let players = table(seat(0, 10, 0, None), vec![seat(1, 10, 0, None)]);

    assert_eq!(bet_for(&s, 7, &players, &mut rng), Bet::Pass);
    assert_eq!(bet_for(&s, 9, &players, &mut rng), Bet::coins(9));
    assert_eq!(bet_for(&s, 12, &players, &mut rng), Bet::coins(10));
}

//
// Пулы соперников
//
#[test]
fn ai_pools_per_difficulty() {
    let f = factory();

    let easy: Vec<&str> = f.ai_pool(GameDifficulty::Easy).iter().map(|(n, _)| *n).collect();
    assert_eq!(easy, vec!["John", "Debbie", "Bart", "Meghan", "Mike", "Cedric"]);

    let medium = f.ai_pool(GameDifficulty::Medium);
    assert_eq!(medium.len(), 6);
    assert_eq!(
        medium[0].1.kind,
        StrategyKind::Standard { take_factor: 0.45 }
    );
    assert_eq!(
        medium[5].1.kind,
        StrategyKind::RandomPlusOne(RandomPlusOneCap::Highest)
    );

    let hard = f.ai_pool(GameDifficulty::Hard);
    assert_eq!(
        hard[5].1.kind,
        StrategyKind::HighStandard {
            min_card_value: 8,
            take_factor: 1.0
        }
    );
    assert!(hard.iter().all(|(_, s)| s.goal_score == GOAL));
}
