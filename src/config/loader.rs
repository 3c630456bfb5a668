//! Load `ServerConfig` from environment variables.

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

/// Read configuration from the process environment.
/// Call `dotenvy::dotenv()` first to pick up a `.env` file.
pub fn load_from_env() -> Result<ServerConfig, ConfigError> {
    load_with(|var| std::env::var(var).ok())
}

/// Build configuration from an arbitrary variable lookup; unset variables take their defaults.
pub fn load_with<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let config = ServerConfig {
        database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
        bind_addr: parse_var(
            "BIND_ADDR",
            get("BIND_ADDR").as_deref().unwrap_or(DEFAULT_BIND_ADDR),
        )?,
        api_prefix: get("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.into()),
        max_connections: match get("MAX_CONNECTIONS") {
            Some(v) => parse_var("MAX_CONNECTIONS", &v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        },
        max_body_bytes: match get("MAX_BODY_BYTES") {
            Some(v) => parse_var("MAX_BODY_BYTES", &v)?,
            None => DEFAULT_MAX_BODY_BYTES,
        },
        seed_todos: match get("SEED_TODOS") {
            Some(v) => parse_bool("SEED_TODOS", &v)?,
            None => true,
        },
    };
    validate(&config)?;
    Ok(config)
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: format!("{} ({})", e, value),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            reason: format!("expected a boolean, got '{}'", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load_with(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = load_with(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("API_PREFIX", "/v2"),
            ("MAX_CONNECTIONS", "2"),
            ("SEED_TODOS", "off"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.api_prefix, "/v2");
        assert_eq!(config.max_connections, 2);
        assert!(!config.seed_todos);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load_with(lookup(&[("API_PREFIX", "  ")])).unwrap();
        assert_eq!(config.api_prefix, DEFAULT_API_PREFIX);
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let err = load_with(lookup(&[("MAX_BODY_BYTES", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "MAX_BODY_BYTES", .. }));
    }

    #[test]
    fn rejects_prefix_without_leading_slash() {
        let err = load_with(lookup(&[("API_PREFIX", "api")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "API_PREFIX", .. }));
    }
}
