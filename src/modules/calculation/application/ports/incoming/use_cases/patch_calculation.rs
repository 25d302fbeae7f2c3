use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::{Calculation, CalculationError};
use crate::modules::calculation::application::schemas::{
    CalculationUpdate, CalculationValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCalculationError {
    #[error("Calculation not found")]
    NotFound,

    /// The merged record breaks a field rule
    #[error(transparent)]
    Validation(#[from] CalculationValidationError),

    /// The stored record cannot be evaluated
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
pub trait PatchCalculationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        calculation_id: i32,
        update: CalculationUpdate,
    ) -> Result<Calculation, PatchCalculationError>;
}
