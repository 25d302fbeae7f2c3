use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::Calculation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCalculationError {
    #[error("Calculation not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleCalculationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        calculation_id: i32,
    ) -> Result<Calculation, GetSingleCalculationError>;
}
