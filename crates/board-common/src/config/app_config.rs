//! Application configuration
//!
//! Everything comes from environment variables, optionally seeded from a `.env`
//! file. Only `DATABASE_URL` and `JWT_SECRET` are required.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub snowflake: SnowflakeConfig,
    pub pagination: PaginationConfig,
    pub migrations: MigrationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Deployment environment, from `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// Token lifetimes are in seconds
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// Empty means any origin outside production
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    pub worker_id: u16,
}

/// Page sizes for list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    pub default_per_page: u32,
    pub notifications_per_page: u32,
    pub max_per_page: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MigrationConfig {
    pub dir: String,
    pub run_on_startup: bool,
}

impl AppConfig {
    /// Defaults for everything except the two required secrets
    #[must_use]
    pub fn with_defaults(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            app: AppSettings {
                name: "message-board".to_string(),
                env: Environment::Development,
            },
            api: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: database_url.into(),
                max_connections: 20,
                min_connections: 2,
                acquire_timeout_secs: 10,
            },
            jwt: JwtConfig {
                secret: jwt_secret.into(),
                access_token_expiry: 900,       // 15 minutes
                refresh_token_expiry: 604_800, // 7 days
            },
            rate_limit: RateLimitConfig {
                requests_per_second: 10,
                burst: 50,
            },
            cors: CorsConfig {
                allowed_origins: Vec::new(),
            },
            snowflake: SnowflakeConfig { worker_id: 0 },
            pagination: PaginationConfig {
                default_per_page: 10,
                notifications_per_page: 20,
                max_per_page: 100,
            },
            migrations: MigrationConfig {
                dir: "./migrations".to_string(),
                run_on_startup: true,
            },
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// `MissingVar` for an absent required variable, `InvalidValue` for one that
    /// doesn't parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // .env is optional
        let _ = dotenvy::dotenv();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        let d = Self::with_defaults(database_url, jwt_secret);

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or(d.app.name),
                env: var_or("APP_ENV", d.app.env)?,
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or(d.api.host),
                port: var_or("API_PORT", d.api.port)?,
            },
            database: DatabaseConfig {
                max_connections: var_or("DATABASE_MAX_CONNECTIONS", d.database.max_connections)?,
                min_connections: var_or("DATABASE_MIN_CONNECTIONS", d.database.min_connections)?,
                acquire_timeout_secs: var_or(
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    d.database.acquire_timeout_secs,
                )?,
                ..d.database
            },
            jwt: JwtConfig {
                access_token_expiry: var_or("JWT_ACCESS_TOKEN_EXPIRY", d.jwt.access_token_expiry)?,
                refresh_token_expiry: var_or(
                    "JWT_REFRESH_TOKEN_EXPIRY",
                    d.jwt.refresh_token_expiry,
                )?,
                ..d.jwt
            },
            rate_limit: RateLimitConfig {
                requests_per_second: var_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    d.rate_limit.requests_per_second,
                )?,
                burst: var_or("RATE_LIMIT_BURST", d.rate_limit.burst)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .map(|s| split_list(&s))
                    .unwrap_or(d.cors.allowed_origins),
            },
            snowflake: SnowflakeConfig {
                worker_id: var_or("WORKER_ID", d.snowflake.worker_id)?,
            },
            pagination: PaginationConfig {
                default_per_page: var_or("PAGINATION_DEFAULT_PER_PAGE", d.pagination.default_per_page)?,
                notifications_per_page: var_or(
                    "PAGINATION_NOTIFICATIONS_PER_PAGE",
                    d.pagination.notifications_per_page,
                )?,
                max_per_page: var_or("PAGINATION_MAX_PER_PAGE", d.pagination.max_per_page)?,
            },
            migrations: MigrationConfig {
                dir: env::var("MIGRATIONS_DIR").unwrap_or(d.migrations.dir),
                run_on_startup: var_or("RUN_MIGRATIONS", d.migrations.run_on_startup)?,
            },
        })
    }
}

fn var_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    parse_or(key, env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
