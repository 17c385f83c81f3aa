//! Environment-driven configuration.
//!
//! Variables are read from the process environment, after loading a
//! `.env` file if one exists.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 25;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where station data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacesSource {
    /// Live Google Maps API with this key.
    Google { api_key: String },
    /// Fixture directory for [`crate::places::MockPlacesClient`].
    Mock { data_dir: PathBuf },
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram_token: String,
    pub places: PlacesSource,
    pub cache: CacheConfig,
    /// Port for the health/stats HTTP server.
    pub port: u16,
    pub poll_timeout_secs: u64,
}

impl BotConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let telegram_token =
            get("TELEGRAM_BOT_TOKEN").ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;

        let places = match get("MOCK_PLACES_DIR") {
            Some(dir) => PlacesSource::Mock {
                data_dir: PathBuf::from(dir),
            },
            None => PlacesSource::Google {
                api_key: get("GOOGLE_API_KEY").ok_or(ConfigError::Missing("GOOGLE_API_KEY"))?,
            },
        };

        let mut cache = CacheConfig::default();
        if let Some(secs) = parse_var::<u64>(&get, "CACHE_TTL_SECS")? {
            cache.ttl = Duration::from_secs(secs);
        }

        let port = parse_var(&get, "PORT")?.unwrap_or(DEFAULT_PORT);
        let poll_timeout_secs =
            parse_var(&get, "POLL_TIMEOUT_SECS")?.unwrap_or(DEFAULT_POLL_TIMEOUT_SECS);

        Ok(Self {
            telegram_token,
            places,
            cache,
            port,
            poll_timeout_secs,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    get(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn minimal_live_config() {
        let config = config(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GOOGLE_API_KEY", "key"),
        ])
        .unwrap();

        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(
            config.places,
            PlacesSource::Google {
                api_key: "key".into()
            }
        );
        assert_eq!(config.cache.ttl, Duration::from_secs(1800));
        assert_eq!(config.port, 8080);
        assert_eq!(config.poll_timeout_secs, 25);
    }

    #[test]
    fn missing_token() {
        let err = config(&[("GOOGLE_API_KEY", "key")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let err = config(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GOOGLE_API_KEY", "  "),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("GOOGLE_API_KEY"));
    }

    #[test]
    fn mock_dir_replaces_api_key() {
        let config = config(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("MOCK_PLACES_DIR", "fixtures"),
        ])
        .unwrap();

        assert_eq!(
            config.places,
            PlacesSource::Mock {
                data_dir: PathBuf::from("fixtures")
            }
        );
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GOOGLE_API_KEY", "key"),
            ("CACHE_TTL_SECS", "60"),
            ("PORT", "10000"),
            ("POLL_TIMEOUT_SECS", "50"),
        ])
        .unwrap();

        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert_eq!(config.port, 10000);
        assert_eq!(config.poll_timeout_secs, 50);
    }

    #[test]
    fn invalid_number() {
        let err = config(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GOOGLE_API_KEY", "key"),
            ("PORT", "eighty"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".into()
            }
        );
    }
}
