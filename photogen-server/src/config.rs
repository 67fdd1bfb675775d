//! Runtime configuration loaded from environment variables
//!
//! Database:
//! - `DATABASE_URL`: full Postgres connection string (preferred)
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: used when no URL is set
//! - `PHOTOGEN_TAGS_STORAGE`: `array` (default) or `json`, for new `generations` tables
//!
//! Completion API:
//! - `OPENAI_API_KEY`: required
//! - `OPENAI_BASE_URL`: default `https://api.openai.com/v1`
//! - `OPENAI_MODEL`: default `gpt-4o-mini`
//! - `OPENAI_MAX_OUTPUT_TOKENS`: default 400
//! - `PHOTOGEN_LANGUAGE`: language of generated descriptions (default Russian)

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

use crate::db::TagsStorage;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_NAME: &str = "photogen_db";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 400;
const DEFAULT_LANGUAGE: &str = "Russian";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set (export it or put it in .env)")]
    MissingApiKey,

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

/// Postgres connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Preferred tags column layout when the table does not exist yet
    pub tags_storage: TagsStorage,
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(&lookup, "DB_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DB_PORT",
                value: raw,
            })?,
            None => DEFAULT_DB_PORT,
        };

        let tags_storage = match non_empty(&lookup, "PHOTOGEN_TAGS_STORAGE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PHOTOGEN_TAGS_STORAGE",
                value: raw,
            })?,
            None => TagsStorage::default(),
        };

        Ok(Self {
            url: non_empty(&lookup, "DATABASE_URL"),
            host: non_empty(&lookup, "DB_HOST")
                .unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port,
            user: non_empty(&lookup, "DB_USER")
                .unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: non_empty(&lookup, "DB_NAME")
                .unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            tags_storage,
        })
    }

    /// Replace the connection string (e.g. from a CLI flag).
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.url = url;
        }
        self
    }

    /// Build sqlx connect options, preferring the URL over discrete fields.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::InvalidDatabaseUrl);
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        Ok(options)
    }
}

/// Completion API settings
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: u32,
    /// Language the descriptions and tags are written in
    pub language: String,
}

impl CompletionConfig {
    /// Create config from environment variables.
    ///
    /// Fails when `OPENAI_API_KEY` is missing or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(&lookup, "OPENAI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let max_output_tokens = match non_empty(&lookup, "OPENAI_MAX_OUTPUT_TOKENS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "OPENAI_MAX_OUTPUT_TOKENS",
                value: raw,
            })?,
            None => DEFAULT_MAX_OUTPUT_TOKENS,
        };

        Ok(Self {
            api_key,
            base_url: non_empty(&lookup, "OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty(&lookup, "OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_output_tokens,
            language: non_empty(&lookup, "PHOTOGEN_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
