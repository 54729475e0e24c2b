//! Server configuration from environment variables

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Catalog JSON to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    pub cache_capacity: u64,
    pub cache_ttl: Duration,
    /// Matches shown before the full report is unlocked
    pub preview_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            catalog_path: None,
            cache_capacity: 10_000,
            cache_ttl: Duration::from_secs(300),
            preview_count: 3,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup("CATALOG_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            catalog_path,
            cache_capacity: parse_or(&lookup, "CACHE_CAPACITY", defaults.cache_capacity),
            cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )),
            preview_count: parse_or(&lookup, "PREVIEW_COUNT", defaults.preview_count),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {}='{}', using default {}", key, raw, default);
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_values_parsed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("CATALOG_PATH", "/srv/models.json"),
            ("CACHE_CAPACITY", "500"),
            ("CACHE_TTL_SECS", "60"),
            ("PREVIEW_COUNT", "5"),
        ]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/models.json")));
        assert_eq!(config.cache_capacity, 500);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.preview_count, 5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("PREVIEW_COUNT", "-1"),
            ("CATALOG_PATH", "  "),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.preview_count, 3);
        assert!(config.catalog_path.is_none());
    }
}
