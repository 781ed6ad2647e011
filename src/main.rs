//! CLI entry point for the tile map generator

use clap::Parser;
use tilestack::io::cli::{Cli, Generator};

fn main() -> tilestack::Result<()> {
    let cli = Cli::parse();
    let mut generator = Generator::new(cli);
    generator.run().map(|_| ())
}
