use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads configuration, resolves the generator credential, and validates
///
/// With no path, defaults are used for every section; a file only needs to
/// name the keys it overrides. The bearer credential is read once here from
/// the environment variable named by `generator.api-key-env` and never
/// again mid-call.
///
/// An absent credential is NOT a validation failure at this point:
/// extract-only invocations never need one. Generator construction is
/// where a missing key becomes an error.
///
/// # Arguments
///
/// * `path` - Optional path to a TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Loaded, credential-resolved, validated configuration
/// * `Err(ConfigError)` - Failed to read, parse, or validate
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => Config::default(),
    };

    config.generator.api_key =
        std::env::var(&config.generator.api_key_env).unwrap_or_default();

    validate(&config)?;

    Ok(config)
}
