use crate::auth::adapter::outgoing::security::{HasherConfig, PasswordHashAlgorithm};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process-level settings read once at start-up
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub hasher: HasherConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let defaults = HasherConfig::default();
        let algorithm = match lookup("PASSWORD_HASHER") {
            Some(raw) => raw
                .parse::<PasswordHashAlgorithm>()
                .map_err(|reason| ConfigError::Invalid {
                    key: "PASSWORD_HASHER",
                    reason,
                })?,
            None => defaults.algorithm,
        };

        let hasher = HasherConfig {
            algorithm,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?,
            argon2_memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", defaults.argon2_memory_kib)?,
            argon2_iterations: parse_or(&lookup, "ARGON2_ITERATIONS", defaults.argon2_iterations)?,
            argon2_parallelism: parse_or(
                &lookup,
                "ARGON2_PARALLELISM",
                defaults.argon2_parallelism,
            )?,
        };

        Ok(Self {
            database_url,
            host,
            port,
            hasher,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Try `.env.{RUST_ENV}` first, then fall back to `.env`
pub fn load_dotenv() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
