pub mod config;
pub mod list;
pub mod press;
pub mod send;

use std::{fs, sync::Arc};

use kenku_deck::{
    render_note, ButtonList, ConfigStore, Dispatcher, JsonConfigStore, KenkuError,
    TerminalNotifier,
};
use log::info;

pub fn config_store(config_path: Option<String>) -> JsonConfigStore {
    config_path
        .map(JsonConfigStore::new)
        .unwrap_or_default()
}

pub fn dispatcher() -> Arc<Dispatcher> {
    Arc::new(Dispatcher::new(Arc::new(TerminalNotifier)))
}

/// Renders every kenku block of the note at `note_path` into a button list.
pub fn render_note_file(
    note_path: &str,
    config_path: Option<String>,
) -> Result<ButtonList, KenkuError> {
    info!("Loading configuration...");
    let config = config_store(config_path).load()?;

    let markdown = fs::read_to_string(note_path)?;
    let mut buttons = ButtonList::default();
    let count = render_note(&markdown, &mut buttons, &config.base_url, &dispatcher())?;
    info!("Rendered {} button(s) from {}", count, note_path);

    Ok(buttons)
}
