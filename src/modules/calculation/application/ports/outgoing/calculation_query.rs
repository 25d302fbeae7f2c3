// src/modules/calculation/application/ports/outgoing/calculation_query.rs

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::Calculation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CalculationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side. Every lookup is scoped to the owner; another user's record is
/// indistinguishable from a missing one.
#[async_trait]
pub trait CalculationQuery: Send + Sync {
    /// Newest first
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Calculation>, CalculationQueryError>;

    async fn find_by_id(
        &self,
        owner: UserId,
        calculation_id: i32,
    ) -> Result<Option<Calculation>, CalculationQueryError>;
}
