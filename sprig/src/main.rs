mod cli;
mod prompt;
mod report;

use clap::Parser;
use eyre::Result;

use crate::cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse().run()
}
