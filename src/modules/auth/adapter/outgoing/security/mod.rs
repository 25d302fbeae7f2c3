pub mod argon2_hasher;
pub mod bcrypt_hasher;

use std::str::FromStr;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHashAlgorithm {
    Bcrypt,
    Argon2,
}

impl FromStr for PasswordHashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(format!("unknown password hash algorithm '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HasherConfig {
    pub algorithm: PasswordHashAlgorithm,
    pub bcrypt_cost: u32,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordHashAlgorithm::Bcrypt,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
            argon2_memory_kib: 4 * 1024,
            argon2_iterations: 3,
            argon2_parallelism: 1,
        }
    }
}

pub fn build_password_hasher(
    config: &HasherConfig,
) -> Result<Arc<dyn PasswordHasher>, HashError> {
    let hasher: Arc<dyn PasswordHasher> = match config.algorithm {
        PasswordHashAlgorithm::Bcrypt => Arc::new(BcryptHasher::with_cost(config.bcrypt_cost)?),
        PasswordHashAlgorithm::Argon2 => Arc::new(Argon2Hasher::with_params(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )?),
    };
    Ok(hasher)
}
