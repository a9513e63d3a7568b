//! Runtime configuration read from the environment.

use std::env;

pub const DEFAULT_DB_PATH: &str = "./data/fintrack.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file (`FT_DB_PATH`).
    pub db_path: String,
    /// Log output format (`FT_LOG_FORMAT`, `text` or `json`).
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the configuration, loading a `.env` file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup("FT_DB_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let log_format = lookup("FT_LOG_FORMAT")
            .map(|f| LogFormat::parse(&f))
            .unwrap_or(LogFormat::Text);
        Self {
            db_path,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FT_DB_PATH", "/tmp/ft.db"),
            ("FT_LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.db_path, "/tmp/ft.db");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_db_path_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("FT_DB_PATH", "  ")]));
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
    }
}
