use kenku_deck::{ConfigStore, KenkuError};

use super::config_store;

/// Prints the base URL, or validates and persists a new one.
pub fn config(base_url: Option<String>, config_path: Option<String>) -> Result<(), KenkuError> {
    let store = config_store(config_path);
    let mut config = store.load()?;

    match base_url {
        Some(base_url) => {
            config.set_base_url(&base_url)?;
            store.save(&config)?;
            println!("Base URL set to {}", config.base_url);
        }
        None => println!("{}", config.base_url),
    }

    Ok(())
}
