use kenku_deck::{config::parse_base_url, parse_directive, ConfigStore, KenkuError};
use log::{debug, info};

use super::{config_store, dispatcher};

pub async fn send(row: &str, config_path: Option<String>) -> Result<(), KenkuError> {
    info!("Loading configuration...");
    let config = config_store(config_path).load()?;
    let base_url = parse_base_url(&config.base_url)?;

    let directive = parse_directive(row.trim());
    debug!("Parsed directive: {:?}", directive);

    let outcome = dispatcher().dispatch(&directive, &base_url).await;
    debug!("Outcome: {:?}", outcome);

    Ok(())
}
