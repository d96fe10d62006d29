//! CLI entry point for the grid maze generator

use clap::Parser;
use gridmaze::io::cli::{Cli, MazeProcessor};

fn main() -> gridmaze::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let mut processor = MazeProcessor::new(cli);
    processor.process().map(|_| ())
}
