use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{User, UserRead};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository,
};

// ========================= Login Request =========================
/// Validated login request. `username` holds either a username or an email.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    identifier: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username cannot be empty")]
    EmptyIdentifier,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(identifier: String, password: String) -> Result<Self, LoginRequestError> {
        let identifier = identifier.trim().to_string();
        if identifier.is_empty() {
            return Err(LoginRequestError::EmptyIdentifier);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            identifier,
            password,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn looks_like_email(&self) -> bool {
        self.identifier.contains('@')
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

/// Documentation shape for [`LoginRequest`]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequestSchema {
    /// Username or email address
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "SecurePass123")]
    pub password: String,
}

/// Hashed once per use case and verified against when no account matches
const DUMMY_PASSWORD: &str = "NoSuchAccount0";

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUserResponse {
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    pub user: UserRead,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    dummy_hash: OnceCell<String>,
}

impl<Q, R> LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Spends one verify on a throwaway hash so unknown identifiers cost
    /// the same as a wrong password.
    async fn verify_against_dummy(&self, password: &str) {
        let dummy = self
            .dummy_hash
            .get_or_try_init(|| self.password_hasher.hash_password(DUMMY_PASSWORD))
            .await;

        if let Ok(hash) = dummy {
            let _ = self.password_hasher.verify_password(password, hash).await;
        }
    }

    async fn find_user(&self, request: &LoginRequest) -> Result<Option<User>, LoginError> {
        let by_username = self
            .query
            .find_by_username(request.identifier())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        if by_username.is_some() || !request.looks_like_email() {
            return Ok(by_username);
        }

        self.query
            .find_by_email(&request.identifier().to_lowercase())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, R> ILoginUserUseCase for LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let Some(mut user) = self.find_user(&request).await? else {
            self.verify_against_dummy(request.password()).await;
            return Err(LoginError::InvalidCredentials);
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        // Inactive accounts get the same answer as a bad password
        if !is_valid || !user.is_active {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let now = Utc::now();
        match self.repository.record_login(user.id, now).await {
            Ok(()) => user.last_login = Some(now),
            Err(e) => warn!(user_id = %user.id, error = %e, "Failed to record last login"),
        }

        Ok(LoginUserResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: user.into(),
        })
    }
}
