use crate::config;
use crate::console::Terminal;
use crate::game;
use crate::store::JsonFileStore;

pub fn play_game() {
    let game_config = config::load_config();
    let store = JsonFileStore::new(game_config.scores_file.clone());
    let mut terminal = Terminal::new();

    log::debug!("using scores file {}", store.path().display());
    game::run(&mut terminal, &store, &game_config, &mut rand::rng());
}
