use bid_to_win_engine::api::{BetApi, DifficultyApi};
use bid_to_win_engine::domain::{bet::Bet, settings::GameDifficulty, settings::GameSettings};
use bid_to_win_engine::engine::{GameEngine, RandomSource, SpeedMode};
use bid_to_win_engine::infra::{
    bet_from_api, bet_to_api, difficulty_from_api, difficulty_to_api, load_leaderboard,
    save_leaderboard, DeterministicRng, GameStorage, IdGenerator, InMemoryGameStorage,
    ScriptedRng,
};
use bid_to_win_engine::rating::{EloRatingSystem, Leaderboard, PlayerStats};
use bid_to_win_engine::state::GameEngineSnapshot;

//
// rng.rs
//
#[test]
fn deterministic_rng_repeats_for_same_seed() {
    let mut a = DeterministicRng::from_seed(42);
    let mut b = DeterministicRng::from_seed(42);

    let xs: Vec<u32> = (0..20).map(|_| a.gen_range_inclusive(1, 100)).collect();
    let ys: Vec<u32> = (0..20).map(|_| b.gen_range_inclusive(1, 100)).collect();
    assert_eq!(xs, ys);
    assert!(xs.iter().all(|x| (1..=100).contains(x)));

    let mut left: Vec<u32> = (0..13).collect();
    let mut right = left.clone();
    a.shuffle(&mut left);
    b.shuffle(&mut right);
    assert_eq!(left, right);
}

#[test]
fn degenerate_range_returns_low() {
    let mut rng = DeterministicRng::from_seed(1);
    assert_eq!(rng.gen_range_inclusive(5, 5), 5);
    assert_eq!(rng.gen_range_inclusive(7, 3), 7);
}

#[test]
fn scripted_rng_cycles_and_clamps() {
    let mut rng = ScriptedRng::new(vec![3, 50, 0]);
    assert_eq!(rng.gen_range_inclusive(1, 10), 3);
    assert_eq!(rng.gen_range_inclusive(1, 10), 10);
    assert_eq!(rng.gen_range_inclusive(1, 10), 1);
    assert_eq!(rng.gen_range_inclusive(1, 10), 3);

    let mut cards = vec![1, 2, 3];
    rng.shuffle(&mut cards);
    assert_eq!(cards, vec![1, 2, 3]);

    let mut empty = ScriptedRng::default();
    assert_eq!(empty.gen_range_inclusive(4, 9), 4);
}

//
// ids.rs
//
#[test]
fn id_generator_is_monotonic() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_game_id(), 1);
    assert_eq!(ids.next_game_id(), 2);

    let resumed = IdGenerator::starting_at(40);
    assert_eq!(resumed.next_game_id(), 40);
    assert_eq!(resumed.next_game_id(), 41);
}

//
// persistence.rs
//
#[test]
fn leaderboard_survives_storage_round_trip() {
    let mut storage = InMemoryGameStorage::new();
    assert_eq!(load_leaderboard(&storage).unwrap(), Leaderboard::new());

    let board = Leaderboard::from_stats(vec![(
        "Alice".to_string(),
        PlayerStats {
            rating: 1012.5,
            total_games: 3,
            total_wins: 2,
        },
    )]);
    save_leaderboard(&mut storage, &board);

    assert_eq!(
        storage.load_leaderboard_raw().as_deref(),
        Some("Alice:1012.5;3;2;;")
    );
    assert_eq!(load_leaderboard(&storage).unwrap(), board);
}

#[test]
fn broken_leaderboard_string_is_an_error() {
    let mut storage = InMemoryGameStorage::new();
    storage.save_leaderboard_raw("garbage;;".to_string());
    assert!(load_leaderboard(&storage).is_err());
}

#[test]
fn storage_keeps_name_settings_and_games() {
    let mut storage = InMemoryGameStorage::new();
    assert!(storage.load_player_name().is_none());
    assert!(storage.load_settings().is_none());

    storage.save_player_name("Alice");
    storage.save_settings(&GameSettings::hard());
    assert_eq!(storage.load_player_name().as_deref(), Some("Alice"));
    assert_eq!(storage.load_settings(), Some(GameSettings::hard()));

    let mut rng = ScriptedRng::default();
    let engine = GameEngine::for_settings(
        GameSettings::easy(),
        "Alice",
        Box::new(EloRatingSystem::default()),
        &mut rng,
    )
    .unwrap();
    let snapshot = GameEngineSnapshot::from_engine(&engine);

    storage.save_game(7, Some(snapshot.clone()));
    assert_eq!(storage.load_game(7), Some(snapshot));
    storage.save_game(7, None);
    assert!(storage.load_game(7).is_none());
}

//
// mapping.rs
//
#[test]
fn api_mapping_is_symmetric() {
    for d in [GameDifficulty::Easy, GameDifficulty::Medium, GameDifficulty::Hard] {
        assert_eq!(difficulty_from_api(difficulty_to_api(d)), d);
    }
    assert_eq!(difficulty_to_api(GameDifficulty::Hard), DifficultyApi::Hard);

    assert_eq!(bet_from_api(BetApi::Pass), Bet::Pass);
    assert_eq!(bet_from_api(BetApi::Coins(0)), Bet::coins(0));
    assert_eq!(bet_to_api(Bet::coins(4)), BetApi::Coins(4));
}

//
// state.rs – снапшот
//
#[test]
fn restored_snapshot_plays_on_identically() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut engine = GameEngine::for_settings(
        GameSettings::medium(),
        "Alice",
        Box::new(EloRatingSystem::default()),
        &mut rng,
    )
    .unwrap()
    .with_speed(SpeedMode::Instantaneous);
    engine.start_game(&mut rng).unwrap();

    let snapshot = GameEngineSnapshot::from_engine(&engine);

    // Снапшот переживает JSON.
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: GameEngineSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let mut restored = decoded.into_engine();
    assert_eq!(restored.players(), engine.players());
    assert_eq!(restored.card(), engine.card());
    assert_eq!(restored.current_seat(), engine.current_seat());
    assert!(restored.is_started());

    let mut rng_restored = rng.clone();
    let a = engine.place_bet_for_human_player(Bet::Pass, &mut rng).unwrap();
    let b = restored
        .place_bet_for_human_player(Bet::Pass, &mut rng_restored)
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(engine.players(), restored.players());
    assert_eq!(engine.round_number(), restored.round_number());
    assert_eq!(engine.history(), restored.history());
    assert_eq!(
        GameEngineSnapshot::from_engine(&engine),
        GameEngineSnapshot::from_engine(&restored)
    );
}
