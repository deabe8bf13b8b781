//! Hand Ranking Quiz Binary
//!
//! Deals random scenarios and asks for the best five-card hand category.
//!
//! Options: --mode, --seed, --rounds, --options, -v

use clap::Parser;
use quizpoker::quiz::mode::Mode;
use quizpoker::quiz::session::Session;

/// Command line options for one quiz session.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Deal style: five-card draw or seven-card holdem
    #[arg(long, value_enum, default_value_t = Mode::Holdem)]
    mode: Mode,
    /// Replay a dealing sequence (default: drawn from entropy and logged)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many rounds instead of prompting to continue
    #[arg(long)]
    rounds: Option<usize>,
    /// Answer choices per round, including the correct one
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    options: u8,
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    quizpoker::log(match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    });
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);
    Session::new(args.mode, args.options as usize, args.rounds, seed).run()?;
    Ok(())
}
