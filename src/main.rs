//! embsubmit CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args and run one submission pass.
//! For programmatic use, prefer the library API (`embsubmit::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
