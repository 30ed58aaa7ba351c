//! Configuration file loader for the `.relay-kit/` directory.
//!
//! The tracker keeps its configuration in `<root>/.relay-kit/config.toml`.
//! A missing directory or file is not an error: the tracker falls back to
//! [`RelayConfig::default`] so a fresh working directory is immediately
//! usable.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::RelayConfig;
use std::path::Path;

/// Loads tracker configuration from the `.relay-kit/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.relay-kit/` folder
///
/// # Returns
///
/// The parsed `RelayConfig`, or the default configuration when no
/// `config.toml` exists under `root`.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, or if it
/// contains invalid TOML.
///
/// # Example
///
/// ```rust,no_run
/// use rk_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("Notebooks come from {}/{}", config.notebooks.owner, config.notebooks.repo);
/// # Ok(())
/// # }
/// ```
pub fn load_config(root: &Path) -> ConfigResult<RelayConfig> {
    let config_path = root.join(".relay-kit").join("config.toml");

    // If config.toml doesn't exist, return default
    if !config_path.exists() {
        return Ok(RelayConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: RelayConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}
