//! Симулятор: гоняет много игр подряд, место человека играет выбранной стратегией.
//! Нужен, чтобы сравнивать стратегии и проверять движок под нагрузкой.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bid_to_win_engine::domain::bet::Bet;
use bid_to_win_engine::domain::settings::{GameDifficulty, GameSettings};
use bid_to_win_engine::engine::{
    CueRecorder, EngineError, GameEngine, GameStatus, SoundCue, SpeedMode,
};
use bid_to_win_engine::infra::{
    load_leaderboard, save_leaderboard, DeterministicRng, GameStorage, InMemoryGameStorage,
};
use bid_to_win_engine::rating::EloRatingSystem;
use bid_to_win_engine::strategy::{BettingStrategy, BettingStrategyFactory};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl From<Difficulty> for GameDifficulty {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => GameDifficulty::Easy,
            Difficulty::Medium => GameDifficulty::Medium,
            Difficulty::Hard => GameDifficulty::Hard,
        }
    }
}

/// Чем играет место человека.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum HumanStrategy {
    PlusOne,
    Random,
    Conservative,
    Standard,
    /// Всегда Pass.
    Passive,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Bid-to-win batch simulator")]
struct Args {
    #[arg(short, long, default_value = "100")]
    games: u32,

    #[arg(short, long, value_enum, default_value = "medium")]
    difficulty: Difficulty,

    /// JSON с настройками вместо пресета.
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(long, value_enum, default_value = "standard")]
    human: HumanStrategy,

    #[arg(long, default_value = "Player")]
    name: String,

    /// Take factor для стратегии standard.
    #[arg(long, default_value = "0.5")]
    take_factor: f64,

    /// Логи по каждому ходу.
    #[arg(short, long)]
    verbose: bool,
}

fn human_strategy(args: &Args, goal_score: u32) -> BettingStrategy {
    let factory = BettingStrategyFactory::new(goal_score);
    match args.human {
        HumanStrategy::PlusOne => factory.plus_one(),
        HumanStrategy::Random => factory.random(),
        HumanStrategy::Conservative => factory.conservative_random_plus_one(),
        HumanStrategy::Standard => factory.standard(args.take_factor),
        HumanStrategy::Passive => factory.manual(),
    }
}

/// Одна игра до конца. Возвращает имя победителя и число раундов.
fn play_one(
    engine: &mut GameEngine,
    strategy: &BettingStrategy,
    rng: &mut DeterministicRng,
) -> Result<(String, u32), EngineError> {
    let mut status = engine.start_game(rng)?;

    while let GameStatus::AwaitingHuman { .. } = status {
        let card = engine
            .card()
            .ok_or(EngineError::Internal("нет карты на столе"))?;
        let bet = strategy.generate_bet(card.points(), engine.players(), engine.human(), rng);

        status = match engine.place_bet_for_human_player(bet, rng) {
            Ok(status) => status,
            Err(EngineError::InvalidBet(rejection)) => {
                warn!(?rejection, %bet, "strategy bet rejected, passing instead");
                engine.place_bet_for_human_player(Bet::Pass, rng)?
            }
            Err(e) => return Err(e),
        };
    }

    let end = engine
        .game_end_state()
        .ok_or(EngineError::Internal("игра не закончилась"))?;
    Ok((end.winner.name.clone(), engine.round_number()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let settings = match &args.settings {
        Some(path) => GameSettings::from_json_file(path)?,
        None => GameSettings::for_difficulty(args.difficulty.into()),
    };
    settings.validate()?;

    let strategy = human_strategy(&args, settings.goal_score);
    let mut rng = DeterministicRng::from_seed(args.seed);
    let mut storage = InMemoryGameStorage::new();
    storage.save_player_name(&args.name);
    storage.save_settings(&settings);

    info!(
        games = args.games,
        seed = args.seed,
        human = ?args.human,
        difficulty = ?settings.game_difficulty,
        "simulation started"
    );

    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_rounds: u64 = 0;
    let mut big_cards_to_ai: u64 = 0;

    for game in 0..args.games {
        let leaderboard = load_leaderboard(&storage)?;
        let cues = CueRecorder::new();

        let mut engine = GameEngine::for_settings(
            settings.clone(),
            &args.name,
            Box::new(EloRatingSystem::new(leaderboard)),
            &mut rng,
        )?
        .with_speed(SpeedMode::Instantaneous)
        .with_notifier(Box::new(cues.clone()));

        let (winner, rounds) = play_one(&mut engine, &strategy, &mut rng)?;
        info!(game, %winner, rounds, "game finished");

        if let Some(end) = engine.game_end_state() {
            save_leaderboard(&mut storage, &end.leaderboard);
        }

        big_cards_to_ai += cues
            .cues()
            .iter()
            .filter(|c| matches!(c, SoundCue::RoundLossBigCard))
            .count() as u64;
        *wins.entry(winner).or_default() += 1;
        total_rounds += rounds as u64;
    }

    println!("=== {} games, seed {} ===", args.games, args.seed);
    println!(
        "avg rounds per game: {:.1}",
        total_rounds as f64 / args.games.max(1) as f64
    );
    println!("big cards taken by AI: {big_cards_to_ai}");
    println!("--- wins ---");
    for (name, count) in &wins {
        println!("{name:>16}: {count}");
    }
    println!("--- leaderboard ---");
    for row in load_leaderboard(&storage)?.display_rows() {
        println!(
            "{:>16}: {:>5} ({} games, {}% wins)",
            row.name, row.rating, row.games, row.win_ratio
        );
    }

    Ok(())
}
