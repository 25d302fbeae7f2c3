use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::incoming::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]{3,50}$").expect("username pattern is valid"));

const MAX_NAME_LENGTH: usize = 50;

/// Registration payload as received from the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserInput {
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "SecurePass123")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0}")]
    InvalidUsername(String),

    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("{0}")]
    InvalidName(String),

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl CreateUserError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CreateUserError::InvalidUsername(_)
                | CreateUserError::InvalidEmail(_)
                | CreateUserError::InvalidPassword(_)
                | CreateUserError::InvalidName(_)
        )
    }
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<User, CreateUserError>;
}

pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }

    fn validate(&self, input: CreateUserInput) -> Result<CreateUserInput, CreateUserError> {
        let username = input.username.trim().to_string();
        if !USERNAME_PATTERN.is_match(&username) {
            return Err(CreateUserError::InvalidUsername(
                "Username must be 3-50 characters of letters, digits, '_', '-' or '.'"
                    .to_string(),
            ));
        }

        let email = input.email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        let first_name = validate_name("First name", &input.first_name)?;
        let last_name = validate_name("Last name", &input.last_name)?;

        self.password_policy
            .validate(&input.password)
            .map_err(|e| CreateUserError::InvalidPassword(e.to_string()))?;

        Ok(CreateUserInput {
            username,
            email,
            first_name,
            last_name,
            password: input.password,
        })
    }
}

fn validate_name(field: &str, value: &str) -> Result<String, CreateUserError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CreateUserError::InvalidName(format!(
            "{field} cannot be empty"
        )));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(CreateUserError::InvalidName(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(value.to_string())
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<User, CreateUserError> {
        let input = self.validate(input)?;

        if self
            .query
            .find_by_username(&input.username)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::UsernameAlreadyExists);
        }

        if self
            .query
            .find_by_email(&input.email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| match e {
                HashError::PasswordTooLong(_) => CreateUserError::InvalidPassword(e.to_string()),
                other => CreateUserError::HashingFailed(other.to_string()),
            })?;

        let data = CreateUserData {
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
        };

        // The lookups above can race with a concurrent registration
        self.repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameAlreadyExists => {
                    CreateUserError::UsernameAlreadyExists
                }
                UserRepositoryError::EmailAlreadyExists => CreateUserError::EmailAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })
    }
}
