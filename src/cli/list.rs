use kenku_deck::KenkuError;

use super::render_note_file;

pub fn list(note_path: &str, config_path: Option<String>) -> Result<(), KenkuError> {
    let buttons = render_note_file(note_path, config_path)?;

    if buttons.buttons().is_empty() {
        println!("No kenku buttons found.");
    } else {
        println!("Kenku Buttons:");
        for (i, button) in buttons.buttons().iter().enumerate() {
            println!("{}. {}", i + 1, button.text);
        }
    }

    Ok(())
}
