//! docsnip CLI: pull usage examples and a clean summary out of README files.
//!
//! Reads markdown from a file or stdin and prints structured JSON (or plain
//! text) for downstream tooling.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
