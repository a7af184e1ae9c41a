mod levels;
mod play;
mod scores;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "Guess the secret number, climb the leaderboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play interactively (the default)
    Play,
    /// Show the high score table
    Scores,
    /// List the difficulty levels
    Levels,
}

pub fn run(cli: Cli) {
    match cli.command {
        None | Some(Commands::Play) => play::play_game(),
        Some(Commands::Scores) => scores::show_scores(),
        Some(Commands::Levels) => levels::show_levels(),
    }
}
