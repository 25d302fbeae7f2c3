use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCalculationError {
    #[error("Calculation not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCalculationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, calculation_id: i32)
        -> Result<(), DeleteCalculationError>;
}
