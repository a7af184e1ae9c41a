pub mod prompt;
pub mod round;
pub mod scoring;

use chrono::Local;
use rand::Rng;

use crate::config::GameConfig;
use crate::console::Console;
use crate::display::{display_banner, display_difficulties};
use crate::models::{Difficulty, GameSession, ScoreEntry};
use crate::store::{self, ScoreStore};

pub use round::RoundOutcome;

pub fn draw_secret<R: Rng>(difficulty: Difficulty, rng: &mut R) -> u32 {
    rng.random_range(1..=difficulty.range())
}

/// Plays rounds until the player declines a replay or input closes. Each
/// round starts from a fresh name, level and secret.
pub fn run<R: Rng>(
    console: &mut dyn Console,
    store: &dyn ScoreStore,
    config: &GameConfig,
    rng: &mut R,
) {
    store::ensure_initialized(store, console);

    loop {
        let outcome = play_round(console, store, config, rng);
        if outcome == RoundOutcome::Abandoned || !prompt::offer_replay(console) {
            break;
        }
    }

    console.print_line("");
    console.print_line("Thanks for playing! Goodbye!");
}

fn play_round<R: Rng>(
    console: &mut dyn Console,
    store: &dyn ScoreStore,
    config: &GameConfig,
    rng: &mut R,
) -> RoundOutcome {
    console.clear_screen();
    display_banner(console);

    let Some(player) = prompt::select_player_name(console) else {
        return RoundOutcome::Abandoned;
    };

    display_difficulties(console);
    let Some(difficulty) = prompt::select_difficulty(console) else {
        return RoundOutcome::Abandoned;
    };

    let secret = draw_secret(difficulty, rng);
    let mut session = GameSession::new(player, difficulty, secret);
    log::debug!("round started on {}", difficulty.display_name());

    let outcome = round::run_attempt_loop(&mut session, console, config.hint_requires_guess_charge);
    if let RoundOutcome::Won { attempts, elapsed } = outcome {
        let elapsed_secs = elapsed.as_secs_f64();
        let score = scoring::compute_score(difficulty, attempts, elapsed_secs);

        console.print_line("");
        console.print_line(&format!(
            "🎉 Congratulations! You've guessed the number in {} attempts!",
            attempts
        ));
        console.print_line(&format!("Time taken: {:.2} seconds", elapsed_secs));
        console.print_line(&format!("Score: {}", score));

        let entry = ScoreEntry::new(&session.player, score, difficulty, Local::now());
        if let Some(rank) = store::record_score(store, entry, console) {
            console.print_line(&format!("You placed #{} on the leaderboard!", rank));
        }
        store::render(store, console);
    } else if let RoundOutcome::Lost { secret } = outcome {
        log::debug!("round lost, secret was {}", secret);
    }
    outcome
}
