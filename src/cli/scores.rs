use crate::config;
use crate::console::Terminal;
use crate::store::{self, JsonFileStore};

pub fn show_scores() {
    let game_config = config::load_config();
    let store = JsonFileStore::new(game_config.scores_file.clone());
    let mut terminal = Terminal::new();

    store::ensure_initialized(&store, &mut terminal);
    store::render(&store, &mut terminal);
}
