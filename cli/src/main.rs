use std::io;

use anyhow::Result;
use clap::Parser;
use minefield_core::{Game, GameConfig, RandomLayoutGenerator};
use tracing_subscriber::EnvFilter;

use args::Args;
use input::TokenReader;

mod args;
mod input;
mod session;

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "seed");

    let mut input = TokenReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    let size = (args.rows, args.cols);
    let config = match args.mines {
        Some(mines) => GameConfig::new(size, mines)?,
        None => session::ask_config(size, &mut input, &mut out)?,
    };

    let game = Game::from_config(config, RandomLayoutGenerator::new(seed));
    let state = session::play(game, &mut input, &mut out)?;
    tracing::info!(?state, "game finished");
    Ok(())
}
