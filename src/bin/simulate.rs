//! Self-play simulator.
//!
//! Plays a batch of computer-vs-computer games and prints the results.
//! Set `RUST_LOG=debug` to follow every move.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use netwar_ccg::{
    GameResult, GameRng, GreedyOpponent, OpponentPolicy, Player, PlayerMap, RulesConfig,
    RulesEngine, ServerGame, ServerGameBuilder, UniformOpponent,
};

/// Policy driving one seat.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyType {
    /// Fixed priority heuristic
    Greedy,
    /// Uniform over legal actions
    Random,
}

impl PolicyType {
    fn build(self) -> Box<dyn OpponentPolicy<ServerGame>> {
        match self {
            PolicyType::Greedy => Box::new(GreedyOpponent),
            PolicyType::Random => Box::new(UniformOpponent),
        }
    }
}

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Play server-defence games between computer opponents", long_about = None)]
struct Cli {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    games: u32,

    /// Seed for the first game; game i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Player 1 policy
    #[arg(long, value_enum, default_value = "greedy")]
    p1: PolicyType,

    /// Player 2 policy
    #[arg(long, value_enum, default_value = "greedy")]
    p2: PolicyType,

    /// Give up on a game after this many actions
    #[arg(long, default_value_t = 10_000)]
    max_actions: usize,

    /// Moves per turn
    #[arg(long, default_value_t = 3)]
    moves: u8,

    /// Copies of each catalog card in the deck
    #[arg(long, default_value_t = 2)]
    copies: usize,
}

#[derive(Debug, Default)]
struct Tally {
    wins: PlayerMap<u32>,
    ties: u32,
    unfinished: u32,
    turns: u64,
}

fn play_one(
    game: &ServerGame,
    policies: &PlayerMap<Box<dyn OpponentPolicy<ServerGame>>>,
    seed: u64,
    max_actions: usize,
) -> Result<(Option<GameResult>, u32)> {
    let mut rng = GameRng::new(seed);
    let mut state = game.new_game(&mut rng);

    for _ in 0..max_actions {
        if let Some(result) = game.is_terminal(&state) {
            return Ok((Some(result), state.turn));
        }
        let policy = &policies[state.current_player];
        let Some(action) = policy.choose_action(game, &state, &mut rng) else {
            break;
        };
        debug!(player = %state.current_player, ?action, "move");
        state = game
            .apply_action(&state, &action)
            .with_context(|| format!("policy chose illegal action {action:?} (seed {seed})"))?;
    }

    Ok((game.is_terminal(&state), state.turn))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = RulesConfig::new()
        .with_moves_per_turn(cli.moves)
        .with_copies_per_card(cli.copies);
    let game = ServerGameBuilder::new()
        .config(config)
        .build()
        .context("invalid rules configuration")?;

    let policies = PlayerMap::new(|p| match p {
        Player::Player1 => cli.p1.build(),
        Player::Player2 => cli.p2.build(),
    });

    let mut tally = Tally::default();
    for i in 0..cli.games {
        let seed = cli.seed.wrapping_add(u64::from(i));
        let (result, turns) = play_one(&game, &policies, seed, cli.max_actions)?;
        tally.turns += u64::from(turns);
        match result {
            Some(GameResult::Winner(p)) => tally.wins[p] += 1,
            Some(GameResult::Tie) => tally.ties += 1,
            None => tally.unfinished += 1,
        }
        info!(game = i, seed, ?result, turns, "game finished");
    }

    println!("Games:        {}", cli.games);
    for player in Player::all() {
        println!("{player} wins: {}", tally.wins[player]);
    }
    println!("Ties:         {}", tally.ties);
    println!("Unfinished:   {}", tally.unfinished);
    println!(
        "Mean turns:   {:.1}",
        tally.turns as f64 / f64::from(cli.games)
    );

    Ok(())
}
