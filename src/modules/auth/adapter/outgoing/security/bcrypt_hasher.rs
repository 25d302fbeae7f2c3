use async_trait::async_trait;
use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Longest password bcrypt reads in full; its NUL terminator takes the 72nd byte.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// bcrypt with a configurable work factor; produces `$2b$` hashes.
///
/// Longer passwords are refused instead of silently truncated.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptHasher {
    pub fn with_cost(cost: u32) -> Result<Self, HashError> {
        if !(4..=31).contains(&cost) {
            return Err(HashError::InvalidParams(format!(
                "bcrypt cost must be between 4 and 31, got {cost}"
            )));
        }
        Ok(Self { cost })
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            non_truncating_hash(password, cost).map_err(|e| match e {
                BcryptError::Truncation(_) => HashError::PasswordTooLong(MAX_PASSWORD_BYTES),
                _ => HashError::HashFailed,
            })
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            // nothing this long was ever hashed, so it cannot match
            match non_truncating_verify(password, &hashed) {
                Err(BcryptError::Truncation(_)) => Ok(false),
                other => other.map_err(|_| HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
