#![deny(warnings)]

mod cli;
mod logging;
mod render;
mod store;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logging::init();
    cli::run(args)
}
