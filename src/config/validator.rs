//! Config validation: values that parse but cannot be served.

use crate::config::ServerConfig;
use crate::error::ConfigError;

pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    let prefix = config.api_prefix.as_str();
    if !prefix.starts_with('/') {
        return Err(ConfigError::Invalid {
            var: "API_PREFIX",
            reason: format!("'{}' must start with '/'", prefix),
        });
    }
    if prefix.len() > 1 && prefix.ends_with('/') {
        return Err(ConfigError::Invalid {
            var: "API_PREFIX",
            reason: format!("'{}' must not end with '/'", prefix),
        });
    }
    if config.max_connections == 0 {
        return Err(ConfigError::Invalid {
            var: "MAX_CONNECTIONS",
            reason: "must be at least 1".into(),
        });
    }
    if config.max_body_bytes == 0 {
        return Err(ConfigError::Invalid {
            var: "MAX_BODY_BYTES",
            reason: "must be at least 1".into(),
        });
    }
    if !config.database_url.starts_with("sqlite:") {
        return Err(ConfigError::Invalid {
            var: "DATABASE_URL",
            reason: format!("'{}' is not a sqlite url", config.database_url),
        });
    }
    Ok(())
}
