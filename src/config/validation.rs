use crate::config::types::{Config, FetcherConfig, GeneratorConfig, SynthesizerConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_generator_config(&config.generator)?;
    validate_synthesizer_config(&config.synthesizer)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "fetcher timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "fetcher connect-timeout-secs must be between 1 and timeout-secs, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "fetcher max-redirects must be <= 20, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetcher user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates generator configuration
fn validate_generator_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    Url::parse(&config.endpoint).map_err(|e| {
        ConfigError::Validation(format!("generator endpoint is not a valid URL: {}", e))
    })?;

    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation(
            "generator model cannot be empty".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(ConfigError::Validation(format!(
            "generator temperature must be between 0.0 and 2.0, got {}",
            config.temperature
        )));
    }

    if config.max_output_tokens < 1 {
        return Err(ConfigError::Validation(
            "generator max-output-tokens must be >= 1".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "generator timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.api_key_env.trim().is_empty() {
        return Err(ConfigError::Validation(
            "generator api-key-env cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates synthesizer configuration
fn validate_synthesizer_config(config: &SynthesizerConfig) -> Result<(), ConfigError> {
    if config.max_input_chars < 500 {
        return Err(ConfigError::Validation(format!(
            "synthesizer max-input-chars must be >= 500, got {}",
            config.max_input_chars
        )));
    }

    if config.min_content_length < 1 {
        return Err(ConfigError::Validation(
            "synthesizer min-content-length must be >= 1".to_string(),
        ));
    }

    Ok(())
}
