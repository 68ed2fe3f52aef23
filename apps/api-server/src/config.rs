//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
    /// Insert the example posts when the store is empty.
    pub seed_on_boot: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let database = get("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse(get("DB_MAX_CONNECTIONS")).unwrap_or(10),
                min_connections: parse(get("DB_MIN_CONNECTIONS")).unwrap_or(1),
            });

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(get("PORT")).unwrap_or(8080),
            database,
            auto_migrate: get("DB_AUTO_MIGRATE").map_or(true, |v| flag(&v)),
            seed_on_boot: get("SEED_ON_BOOT").map_or(true, |v| flag(&v)),
        }
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Anything but `false`/`0`/`no`/`off` counts as enabled.
fn flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert!(config.seed_on_boot);
        assert!(config.auto_migrate);
    }

    #[test]
    fn test_database_settings() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/quill"),
            ("DB_MAX_CONNECTIONS", "25"),
        ]);
        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://localhost/quill");
        assert_eq!(db.max_connections, 25);
        assert_eq!(db.min_connections, 1);
    }

    #[test]
    fn test_blank_database_url_means_in_memory() {
        assert!(config(&[("DATABASE_URL", " ")]).database.is_none());
    }

    #[test]
    fn test_flags_and_bad_port() {
        let config = config(&[("SEED_ON_BOOT", "false"), ("PORT", "not-a-port")]);
        assert!(!config.seed_on_boot);
        assert_eq!(config.port, 8080);
    }
}
