use sqlx::postgres::PgConnectOptions;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Unsupported DB_DRIVER '{0}' (only 'postgres' is supported)")]
    UnsupportedDriver(String),

    #[error("DATABASE_URL is not a valid PostgreSQL URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Insert demo categories and notes into an empty database at startup.
    pub seed_demo_data: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `APP_HOST`             | `0.0.0.0` |
    /// | `APP_PORT`             | `8000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `SEED_DEMO_DATA`       | `false`   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "APP_PORT", 8000, "a valid u16")?;
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a valid u64")?;
        let seed_demo_data = parse_var(&lookup, "SEED_DEMO_DATA", false, "true or false")?;

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            seed_demo_data,
        })
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    /// Full connection URL; takes precedence over the individual fields.
    pub url: Option<String>,
}

impl DatabaseConfig {
    /// Load database settings from environment variables.
    ///
    /// | Env Var        | Default      |
    /// |----------------|--------------|
    /// | `DB_DRIVER`    | `postgres`   |
    /// | `DB_HOST`      | `localhost`  |
    /// | `DB_PORT`      | `5432`       |
    /// | `DB_NAME`      | `notebook`   |
    /// | `DB_USERNAME`  | `postgres`   |
    /// | `DB_PASSWORD`  | empty        |
    /// | `DATABASE_URL` | unset        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let driver = lookup("DB_DRIVER").unwrap_or_else(|| "postgres".into());
        if !matches!(driver.as_str(), "postgres" | "postgresql") {
            return Err(ConfigError::UnsupportedDriver(driver));
        }

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_var(&lookup, "DB_PORT", 5432, "a valid u16")?,
            name: lookup("DB_NAME").unwrap_or_else(|| "notebook".into()),
            username: lookup("DB_USERNAME").unwrap_or_else(|| "postgres".into()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
        })
    }

    /// Build sqlx connect options from either `url` or the discrete fields.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return url.parse().map_err(ConfigError::InvalidUrl);
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.username)
            .password(&self.password))
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) if value.is_empty() => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}
