//! API endpoint and credential resolution

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use testlab_collect::EnvMap;

/// Variable overriding the API server.
pub const HOST_VAR: &str = "TESTLAB_HOST";

/// Variable holding the API key.
pub const KEY_VAR: &str = "TESTLAB_KEY";

/// Default API server.
pub const DEFAULT_HOST: &str = "https://eu.testlab.tools";

/// Resolved API endpoint configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API server
    pub server: String,
    /// Static API key
    pub api_key: String,
}

impl Config {
    /// Resolve the server and key from the environment snapshot.
    ///
    /// The server falls back to the default region host; a missing or empty
    /// key is fatal.
    pub fn from_env(env: &EnvMap) -> Result<Self> {
        let server = env
            .get(HOST_VAR)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let api_key = env
            .get(KEY_VAR)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| Error::missing_env(KEY_VAR))?;

        Ok(Self { server, api_key })
    }
}

/// Capture the process environment once, at startup.
#[must_use]
pub fn snapshot_env() -> EnvMap {
    std::env::vars().collect()
}

/// Mask a secret for logging, keeping a short recognizable prefix.
#[must_use]
pub fn mask(value: &str) -> String {
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}****")
}

/// Parse a `--started` timestamp and normalize it to UTC.
///
/// Accepts RFC 3339 and the zoned variant without fractional seconds that
/// some CI templates emit.
pub fn parse_started(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z")
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| Error::InvalidStarted {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn server_defaults_to_region_host() {
        let env: EnvMap = [(KEY_VAR.to_string(), "tl_secret".to_string())]
            .into_iter()
            .collect();

        let config = Config::from_env(&env).unwrap();
        assert_eq!(config.server, DEFAULT_HOST);
        assert_eq!(config.api_key, "tl_secret");
    }

    #[test]
    fn server_override_wins() {
        let env: EnvMap = [
            (HOST_VAR.to_string(), "http://localhost:3000".to_string()),
            (KEY_VAR.to_string(), "tl_secret".to_string()),
        ]
        .into_iter()
        .collect();

        let config = Config::from_env(&env).unwrap();
        assert_eq!(config.server, "http://localhost:3000");
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = Config::from_env(&EnvMap::new()).unwrap_err();
        assert!(err.to_string().contains(KEY_VAR));
    }

    #[test]
    fn empty_key_is_fatal() {
        let env: EnvMap = [(KEY_VAR.to_string(), String::new())].into_iter().collect();
        assert!(Config::from_env(&env).is_err());
    }

    #[test]
    fn masks_short_and_long_secrets() {
        assert_eq!(mask("tl_0123456789"), "tl_0****");
        assert_eq!(mask("ab"), "ab****");
    }

    #[test]
    fn parses_rfc3339() {
        let ts = parse_started("2024-01-02T15:04:05Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap());
    }

    #[test]
    fn parses_zoned_without_colon() {
        let ts = parse_started("2024-01-02T16:04:05+0100").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap());
    }

    #[test]
    fn rejects_garbage_timestamps() {
        let err = parse_started("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
