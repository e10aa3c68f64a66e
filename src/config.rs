use std::path::PathBuf;

use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub raw_feed_path: PathBuf,
    pub ingest_cron: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            raw_feed_path: PathBuf::from(required_var("RAW_FEED_PATH")?),
            ingest_cron: optional_var("INGEST_CRON")?,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var)?.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is empty".to_string(),
        }),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
