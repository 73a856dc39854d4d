use kenku_deck::KenkuError;
use log::debug;

use super::render_note_file;

pub async fn press(
    note_path: &str,
    index: usize,
    config_path: Option<String>,
) -> Result<(), KenkuError> {
    let buttons = render_note_file(note_path, config_path)?;
    let button = buttons.get(index)?;

    debug!("Pressing [{}] {}", index, button.text);
    let outcome = button.press().await?;
    debug!("Outcome: {:?}", outcome);

    Ok(())
}
