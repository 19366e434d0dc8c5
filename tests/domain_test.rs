use std::collections::HashMap;

use bid_to_win_engine::domain::{
    bet::{highest_bet_in_coins, Bet},
    card::Card,
    coins::Coins,
    deck::CardDeck,
    player::Player,
    roster::RosterFactory,
    settings::{GameDifficulty, GameSettings, SettingsError},
};
use bid_to_win_engine::infra::ScriptedRng;
use bid_to_win_engine::rating::{EloRatingSystem, RatingSystem};
use bid_to_win_engine::strategy::BettingStrategy;

fn player(seat: u64, coins: u32, bet: Option<Bet>) -> Player {
    let mut p = Player::new(
        seat,
        format!("P{seat}"),
        false,
        Coins(coins),
        0,
        BettingStrategy::manual(),
    );
    p.bet = bet;
    p
}

//
// card.rs
//
#[test]
fn card_points_follow_face_value() {
    assert_eq!(Card::Ace.points(), 1);
    assert_eq!(Card::Ten.points(), 10);
    assert_eq!(Card::Jack.points(), 11);
    assert_eq!(Card::Queen.points(), 12);
    assert_eq!(Card::King.points(), 13);

    let total: u32 = Card::ALL.iter().map(|c| c.points()).sum();
    assert_eq!(total, 91);
}

#[test]
fn card_labels_and_parsing() {
    assert_eq!(Card::Ace.to_string(), "A");
    assert_eq!(Card::Ten.to_string(), "10");
    assert_eq!(Card::Queen.label(), "Q");
    assert_eq!(Card::King.image_key(), "img/K.png");

    assert_eq!("A".parse::<Card>(), Ok(Card::Ace));
    assert_eq!("k".parse::<Card>(), Ok(Card::King));
    assert_eq!(" 7 ".parse::<Card>(), Ok(Card::Seven));
    assert_eq!("10".parse::<Card>(), Ok(Card::Ten));
    assert!("0".parse::<Card>().is_err());
    assert!("14".parse::<Card>().is_err());
    assert!("X".parse::<Card>().is_err());
}

#[test]
fn card_from_points_roundtrips_catalog() {
    for card in Card::ALL {
        assert_eq!(Card::from_points(card.points()), Some(card));
    }
    assert_eq!(Card::from_points(0), None);
}

//
// coins.rs / bet.rs
//
#[test]
fn coins_arithmetic_never_goes_negative() {
    let mut c = Coins(3);
    c -= Coins(5);
    assert_eq!(c, Coins::ZERO);
    assert!(c.is_zero());

    c += Coins(2);
    assert_eq!(c + Coins(1), Coins(3));
    assert_eq!(Coins(1).saturating_sub(Coins(4)), Coins(0));
}

#[test]
fn bet_amount_and_display() {
    assert_eq!(Bet::Pass.amount(), Coins::ZERO);
    assert!(Bet::Pass.is_pass());
    assert_eq!(Bet::coins(4).amount(), Coins(4));
    assert_eq!(Bet::coins(4).to_string(), "4 coins");
    assert_eq!(Bet::Pass.to_string(), "pass");
}

#[test]
fn highest_bet_ignores_passes_and_undecided() {
    let players = vec![
        player(0, 10, Some(Bet::coins(3))),
        player(1, 10, Some(Bet::Pass)),
        player(2, 10, None),
        player(3, 10, Some(Bet::coins(5))),
    ];
    assert_eq!(highest_bet_in_coins(&players), Coins(5));

    let nobody = vec![player(0, 10, None), player(1, 10, Some(Bet::Pass))];
    assert_eq!(highest_bet_in_coins(&nobody), Coins::ZERO);
}

#[test]
fn player_points_missing_saturates_at_zero() {
    let mut p = player(0, 10, None);
    p.score = 25;
    assert_eq!(p.points_missing(30), 5);
    p.score = 33;
    assert_eq!(p.points_missing(30), 0);
}

//
// deck.rs
//
#[test]
fn deck_holds_n_copies_of_catalog() {
    let mut rng = ScriptedRng::default();
    let deck = CardDeck::new(3, &mut rng);
    assert_eq!(deck.len(), 39);

    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in &deck.cards {
        *counts.entry(*card).or_default() += 1;
    }
    assert_eq!(counts.len(), 13);
    assert!(counts.values().all(|&n| n == 3));
}

#[test]
fn deck_draws_every_card_of_a_single_deck_once() {
    let mut rng = ScriptedRng::default();
    let mut deck = CardDeck::new(1, &mut rng);

    let mut drawn: Vec<Card> = (0..13).map(|_| deck.draw_card(&mut rng)).collect();
    assert!(deck.is_empty());

    drawn.sort();
    assert_eq!(drawn, Card::ALL.to_vec());
}

#[test]
fn deck_refills_when_exhausted() {
    let mut rng = ScriptedRng::default();
    let mut deck = CardDeck::new(2, &mut rng);

    // Больше, чем 2 * 13: колода сама перенабирается.
    for _ in 0..(2 * 13 * 3 + 5) {
        let card = deck.draw_card(&mut rng);
        assert!((1..=13).contains(&card.points()));
    }
    assert_eq!(deck.len(), 2 * 13 - 5);
}

#[test]
fn deck_with_zero_copies_still_draws() {
    let mut rng = ScriptedRng::default();
    let mut deck = CardDeck {
        num_of_decks: 0,
        cards: Vec::new(),
    };
    let card = deck.draw_card(&mut rng);
    assert!((1..=13).contains(&card.points()));
    assert_eq!(deck.len(), 12);
}

//
// settings.rs
//
#[test]
fn difficulty_presets() {
    let easy = GameSettings::easy();
    assert_eq!(easy.starting_coins, Coins(10));
    assert_eq!(easy.num_of_card_decks, 1);
    assert_eq!(easy.goal_score, 30);

    let medium = GameSettings::default();
    assert_eq!(medium.game_difficulty, GameDifficulty::Medium);
    assert_eq!(medium.num_of_card_decks, 2);

    let hard = GameSettings::for_difficulty(GameDifficulty::Hard);
    assert_eq!(hard.starting_coins, Coins(15));
    assert_eq!(hard.num_of_card_decks, 3);
    assert_eq!(hard.goal_score, 40);
    assert_eq!(hard.player_count(), 4);
}

#[test]
fn settings_json_roundtrip_and_validation() {
    let settings = GameSettings::hard();
    let json = settings.to_json().unwrap();
    assert_eq!(GameSettings::from_json_str(&json).unwrap(), settings);

    let mut broken = GameSettings::easy();
    broken.num_of_card_decks = 0;
    let json = broken.to_json().unwrap();
    assert!(matches!(
        GameSettings::from_json_str(&json),
        Err(SettingsError::Invalid(_))
    ));

    assert!(matches!(
        GameSettings::from_json_str("{not json"),
        Err(SettingsError::Json(_))
    ));
}

#[test]
fn settings_reject_unreachable_or_trivial_goal() {
    let mut s = GameSettings::easy();
    s.ai_player_count = 0;
    assert!(s.validate().is_err());

    let mut s = GameSettings::easy();
    s.starting_points = 30;
    assert!(s.validate().is_err());

    assert!(GameSettings::medium().validate().is_ok());
}

//
// roster.rs
//
#[test]
fn roster_seats_ai_first_then_human() {
    let mut rng = ScriptedRng::default();
    let roster = RosterFactory::new(GameSettings::easy()).create_players("Alice", &mut rng);

    assert_eq!(roster.players.len(), 4);
    assert_eq!(roster.first_player, 0);
    assert_eq!(roster.human_seat(), Some(3));

    let names: Vec<&str> = roster.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["John", "Debbie", "Bart", "Alice"]);

    for (seat, p) in roster.players.iter().enumerate() {
        assert_eq!(p.seat(), seat);
        assert_eq!(p.coins, Coins(10));
        assert_eq!(p.score, 0);
        assert_eq!(p.bet, None);
        assert_eq!(p.strategy.is_manual(), p.is_human);
    }
}

#[test]
fn roster_reuses_pool_with_lap_suffix() {
    let mut settings = GameSettings::hard();
    settings.ai_player_count = 8;

    let mut rng = ScriptedRng::default();
    let roster = RosterFactory::new(settings).create_players("Alice", &mut rng);

    assert_eq!(roster.players.len(), 9);
    assert_eq!(roster.players[0].name, "Camila");
    assert_eq!(roster.players[6].name, "Camila 2");
    assert_eq!(roster.players[7].name, "Lucy 2");
    assert_eq!(roster.human_seat(), Some(8));
}

#[test]
fn roster_ai_never_takes_the_human_name() {
    let mut rng = ScriptedRng::default();
    let roster = RosterFactory::new(GameSettings::easy()).create_players("John", &mut rng);

    let names: Vec<&str> = roster.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["John 2", "Debbie", "Bart", "John"]);

    // У каждого места своя запись в таблице лидеров.
    let mut elo = EloRatingSystem::default();
    let board = elo.update_ratings(&roster.players, &roster.players[0]);
    assert_eq!(board.len(), 4);
    assert_eq!(board.stats("John").map(|s| s.total_wins), Some(0));
    assert_eq!(board.stats("John 2").map(|s| s.total_wins), Some(1));
}

#[test]
fn roster_random_first_player_is_honoured() {
    let mut settings = GameSettings::medium();
    settings.randomize_first_player = true;

    let mut rng = ScriptedRng::new(vec![2]);
    let roster = RosterFactory::new(settings).create_players("Alice", &mut rng);
    assert_eq!(roster.first_player, 2);
}
