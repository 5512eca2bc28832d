use crate::engine::DEFAULT_THROWBACK_WINDOW_DAYS;
use log::warn;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_path: String,
    /// Anniversary window for throwbacks, in days.
    pub throwback_window_days: i64,
    /// Quiet period before a burst of discovery updates is recomputed.
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: "platemate.sqlite".to_string(),
            throwback_window_days: DEFAULT_THROWBACK_WINDOW_DAYS,
            debounce: Duration::from_millis(200),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            host: lookup("PLATEMATE_HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "PLATEMATE_PORT", defaults.port),
            database_path: lookup("PLATEMATE_DB").unwrap_or(defaults.database_path),
            throwback_window_days: parsed(
                &lookup,
                "PLATEMATE_THROWBACK_DAYS",
                defaults.throwback_window_days,
            ),
            debounce: Duration::from_millis(parsed(
                &lookup,
                "PLATEMATE_DEBOUNCE_MS",
                defaults.debounce.as_millis() as u64,
            )),
        }
    }
}

fn parsed<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{key}={raw:?} is not valid, using the default");
            default
        }),
        None => default,
    }
}
