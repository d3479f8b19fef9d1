//! Match Binary
//!
//! Plays one match between two pure strategies and prints the scores and
//! the outcome history.
//!
//! Options: --a, --b, --rounds, --payoffs, --mistakes-a, --mistakes-b,
//! --noise-seed, --noise-rate, --config, --rounds-table, --verbose

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pavlov::{
    simulate_match, GameError, MatchConfig, NamedStrategy, NoiseConfig, Payoffs, MAX_ROUNDS,
};

#[derive(Parser, Debug)]
#[command(name = "pavlov", about = "Iterated Prisoner's Dilemma between pure strategies")]
struct Args {
    /// Strategy for player A (e.g. tft, pavlov, tftwf, allc, alld, stft)
    #[arg(long, default_value = "tit-for-tat")]
    a: NamedStrategy,

    /// Strategy for player B
    #[arg(long, default_value = "always-defect")]
    b: NamedStrategy,

    /// Number of rounds (1-32)
    #[arg(long, default_value_t = 10)]
    rounds: u8,

    /// Payoffs for D, D/C, C/D, C
    #[arg(long, default_value = "0,3,-1,2")]
    payoffs: Payoffs,

    /// Rounds where A is forced to defect (bit 0 = round 1)
    #[arg(long, default_value_t = 0, value_parser = parse_mask)]
    mistakes_a: u32,

    /// Rounds where B is forced to defect (bit 0 = round 1)
    #[arg(long, default_value_t = 0, value_parser = parse_mask)]
    mistakes_b: u32,

    /// Seed for random mistakes
    #[arg(long, requires = "noise_rate")]
    noise_seed: Option<u64>,

    /// Chance (0-100) of a random mistake per player per round
    #[arg(long, requires = "noise_seed", value_parser = clap::value_parser!(u8).range(0..=100))]
    noise_rate: Option<u8>,

    /// Read the whole match from a JSON config instead of flags
    #[arg(long, conflicts_with_all = ["a", "b", "rounds", "payoffs", "mistakes_a", "mistakes_b"])]
    config: Option<PathBuf>,

    /// Print a row per round
    #[arg(long)]
    rounds_table: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Accepts decimal, `0x` hex or `0b` binary masks.
fn parse_mask(s: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid mistake mask `{}`: {}", s, e))
}

impl Args {
    fn match_config(&self) -> Result<MatchConfig, GameError> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::from_path(path)?,
            None => {
                let mut config = MatchConfig::new(self.a, self.b, self.rounds);
                config.payoffs = self.payoffs;
                config.mistakes_a = self.mistakes_a;
                config.mistakes_b = self.mistakes_b;
                config
            }
        };
        if let (Some(seed), Some(rate_percent)) = (self.noise_seed, self.noise_rate) {
            config.noise = Some(NoiseConfig { seed, rate_percent });
        }
        Ok(config)
    }
}

fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // Only fails if a logger is already installed.
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn run(args: &Args) -> Result<(), GameError> {
    let game = args.match_config()?.to_game()?;
    log::info!(
        "{:<32}{} vs {} over {} of max {} rounds",
        "playing match",
        NamedStrategy::identify(&game.a).map_or("custom", NamedStrategy::name),
        NamedStrategy::identify(&game.b).map_or("custom", NamedStrategy::name),
        game.rounds,
        MAX_ROUNDS
    );
    log::debug!("a: {}", game.a);
    log::debug!("b: {}", game.b);

    let result = simulate_match(&game);

    if args.rounds_table {
        println!("{:>5}  {:>2} {:>2}  {:>4} {:>4}  {:>6} {:>6}", "round", "A", "B", "+A", "+B", "A", "B");
        for row in result.rounds(&game.payoffs) {
            println!(
                "{:>5}  {:>2} {:>2}  {:>4} {:>4}  {:>6} {:>6}",
                row.round,
                row.move_a.label(),
                row.move_b.label(),
                row.score_a,
                row.score_b,
                row.cumulative_a,
                row.cumulative_b
            );
        }
    }
    println!("score A: {}", result.score_a);
    println!("score B: {}", result.score_b);
    println!("history: {}", result.history);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    log(args.verbose);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
