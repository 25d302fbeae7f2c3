use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::{Calculation, CalculationError};
use crate::modules::calculation::application::schemas::CalculationCreate;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCalculationError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCalculationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        input: CalculationCreate,
    ) -> Result<Calculation, CreateCalculationError>;
}
