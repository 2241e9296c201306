use crate::config::types::{Config, SearchConfig, SourcesConfig, UserAgentConfig};
use crate::url::parse_source;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_sources_config(&config.sources)?;
    Ok(())
}

/// Validates fan-out and ranking limits
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 100, got {}",
            config.max_concurrent_fetches
        )));
    }

    if config.fetch_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_ms must be >= 100ms, got {}ms",
            config.fetch_timeout_ms
        )));
    }

    if config.max_results < 1 {
        return Err(ConfigError::Validation(format!(
            "max_results must be >= 1, got {}",
            config.max_results
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.browser.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent browser string cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII
    if !config.browser.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Err(ConfigError::Validation(format!(
            "user-agent browser string must be printable ASCII, got '{}'",
            config.browser
        )));
    }

    Ok(())
}

/// Validates inline source URLs and the list path
fn validate_sources_config(config: &SourcesConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.list_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "sources list-path cannot be empty".to_string(),
            ));
        }
    }

    for source in &config.urls {
        parse_source(source).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid source URL '{}': {}", source, e))
        })?;
    }

    Ok(())
}
