mod cli;
mod config;
mod console;
mod display;
mod game;
mod models;
mod store;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    cli::run(cli);
}
