mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;

    // The upstream secret is supplied from the environment in deployed
    // setups; the config file value is a local-development fallback.
    if let Ok(api_key) = env::var("OPENAI_API_KEY") {
        config.upstream.api_key = api_key;
    }

    if config.upstream.api_key.is_empty() {
        return Err(Error::config(
            "upstream api key is not set (set OPENAI_API_KEY or upstream.api_key)",
        ));
    }

    Ok(config)
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
