use clap::Parser;
use minefield_core::{CellCount, Coord};

#[derive(Parser, Debug)]
#[command(name = "minefield", version, about = "Find the mines on a console grid")]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of mines, asked for on start when omitted
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Grid rows
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(Coord).range(1..))]
    pub rows: Coord,

    /// Grid columns
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(Coord).range(1..))]
    pub cols: Coord,
}
