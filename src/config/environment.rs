// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, upstream, cache, session and CORS settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{cache, mealdb, server, session};
use crate::errors::{AppError, AppResult};
use crate::security::SessionSecret;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Upstream recipe service configuration
#[derive(Debug, Clone)]
pub struct MealDbConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Maximum search calls per window
    pub rate_limit_calls: u32,
    /// Sliding window length
    pub rate_limit_window: Duration,
    /// Per-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: mealdb::DEFAULT_BASE_URL.to_owned(),
            rate_limit_calls: mealdb::DEFAULT_RATE_LIMIT_CALLS,
            rate_limit_window: Duration::from_secs(mealdb::DEFAULT_RATE_LIMIT_WINDOW_SECS),
            timeout: Duration::from_secs(mealdb::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(mealdb::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Bounded cache sizing
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Recipe detail cache capacity
    pub recipe_detail_max_entries: usize,
    /// Optional recipe detail expiry; `None` keeps entries until evicted
    pub recipe_detail_ttl: Option<Duration>,
    /// Canonical ingredient memo capacity
    pub ingredient_max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            recipe_detail_max_entries: cache::DEFAULT_RECIPE_DETAIL_MAX_ENTRIES,
            recipe_detail_ttl: None,
            ingredient_max_entries: cache::DEFAULT_INGREDIENT_MAX_ENTRIES,
        }
    }
}

/// Session store and cookie configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session store capacity
    pub max_entries: usize,
    /// Cookie signing secret
    pub secret: SessionSecret,
    /// Whether the secret was generated at startup
    pub secret_generated: bool,
    /// Emit the `Secure` cookie attribute
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_entries: session::DEFAULT_SESSION_MAX_ENTRIES,
            secret: SessionSecret::generate(),
            secret_generated: true,
            cookie_secure: false,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Explicit allow-list; empty mirrors the request origin
    pub allowed_origins: Vec<String>,
}

/// Main server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listener port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Upstream recipe service
    pub mealdb: MealDbConfig,
    /// Cache sizing
    pub cache: CacheSettings,
    /// Sessions and cookies
    pub session: SessionConfig,
    /// Cross-origin policy
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: server::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            mealdb: MealDbConfig::default(),
            cache: CacheSettings::default(),
            session: SessionConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let (secret, secret_generated) = match env::var("SESSION_SECRET") {
            Ok(value) => (SessionSecret::from_config_value(&value)?, false),
            Err(_) => {
                warn!(
                    "SESSION_SECRET not set; generated a random secret, \
                     sessions will not survive restarts"
                );
                (SessionSecret::generate(), true)
            }
        };

        let config = Self {
            http_port: parse_env("HTTP_PORT", server::DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            mealdb: MealDbConfig {
                base_url: env_var_or("MEALDB_BASE_URL", mealdb::DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                rate_limit_calls: parse_positive(
                    "MEALDB_RATE_LIMIT_CALLS",
                    mealdb::DEFAULT_RATE_LIMIT_CALLS,
                )?,
                rate_limit_window: Duration::from_secs(parse_positive(
                    "MEALDB_RATE_LIMIT_WINDOW_SECS",
                    mealdb::DEFAULT_RATE_LIMIT_WINDOW_SECS,
                )?),
                timeout: Duration::from_secs(parse_positive(
                    "MEALDB_TIMEOUT_SECS",
                    mealdb::DEFAULT_TIMEOUT_SECS,
                )?),
                connect_timeout: Duration::from_secs(parse_positive(
                    "MEALDB_CONNECT_TIMEOUT_SECS",
                    mealdb::DEFAULT_CONNECT_TIMEOUT_SECS,
                )?),
            },
            cache: CacheSettings {
                recipe_detail_max_entries: parse_positive(
                    "RECIPE_DETAIL_CACHE_MAX_ENTRIES",
                    cache::DEFAULT_RECIPE_DETAIL_MAX_ENTRIES,
                )?,
                recipe_detail_ttl: parse_optional_positive::<u64>("RECIPE_DETAIL_CACHE_TTL_SECS")?
                    .map(Duration::from_secs),
                ingredient_max_entries: parse_positive(
                    "INGREDIENT_CACHE_MAX_ENTRIES",
                    cache::DEFAULT_INGREDIENT_MAX_ENTRIES,
                )?,
            },
            session: SessionConfig {
                max_entries: parse_positive(
                    "SESSION_MAX_ENTRIES",
                    session::DEFAULT_SESSION_MAX_ENTRIES,
                )?,
                secret,
                secret_generated,
                cookie_secure: parse_env("SESSION_COOKIE_SECURE", false)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .map(|origins| parse_origins(&origins))
                    .unwrap_or_default(),
            },
        };

        if config.environment.is_production() && !config.session.cookie_secure {
            warn!(
                "SESSION_COOKIE_SECURE is false in production; \
                 cookies will be sent over plain HTTP"
            );
        }

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Mealswipe Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Upstream: {}\n\
             - Rate Limit: {} calls / {}s\n\
             - Recipe Detail Cache: {} entries, TTL {}\n\
             - Ingredient Cache: {} entries\n\
             - Sessions: {} entries, secret {}, secure cookie {}\n\
             - CORS: {}",
            self.http_port,
            self.environment,
            self.mealdb.base_url,
            self.mealdb.rate_limit_calls,
            self.mealdb.rate_limit_window.as_secs(),
            self.cache.recipe_detail_max_entries,
            self.cache
                .recipe_detail_ttl
                .map_or_else(|| "never".to_owned(), |ttl| format!("{}s", ttl.as_secs())),
            self.cache.ingredient_max_entries,
            self.session.max_entries,
            if self.session.secret_generated {
                "generated"
            } else {
                "configured"
            },
            self.session.cookie_secure,
            if self.cors.allowed_origins.is_empty() {
                "mirror request origin".to_owned()
            } else {
                self.cors.allowed_origins.join(", ")
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|e: T::Err| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))
        })
    })
}

/// Parse a numeric variable that must be greater than zero
fn parse_positive<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr + PartialOrd + Default,
    T::Err: fmt::Display,
{
    let value = parse_env(key, default)?;
    if value <= T::default() {
        return Err(AppError::config_invalid(format!(
            "{key} must be greater than zero"
        )));
    }
    Ok(value)
}

/// Parse an optional numeric variable that must be greater than zero when set
fn parse_optional_positive<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr + PartialOrd + Default,
    T::Err: fmt::Display,
{
    if env::var(key).is_err() {
        return Ok(None);
    }
    parse_positive(key, T::default()).map(Some)
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    origins_str
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty() && s != "*")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(parse_origins("*").is_empty());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("production"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("TEST"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_omits_secret() {
        let config = ServerConfig::default();
        let summary = config.summary();

        assert!(summary.contains("HTTP Port: 5001"));
        assert!(summary.contains("TTL never"));
        assert!(summary.contains("secret generated"));
    }
}
