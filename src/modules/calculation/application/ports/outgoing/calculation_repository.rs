// src/modules/calculation/application/ports/outgoing/calculation_repository.rs

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::{Calculation, CalculationType};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCalculationData {
    pub owner: UserId,
    pub a: f64,
    pub b: f64,
    pub calculation_type: CalculationType,
    pub result: f64,
}

/// Full replacement of the mutable columns; merging happens in the use case.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCalculationData {
    pub a: f64,
    pub b: f64,
    pub calculation_type: CalculationType,
    pub result: f64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CalculationRepositoryError {
    /// Calculation doesn't exist OR doesn't belong to owner.
    #[error("Calculation not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CalculationRepository: Send + Sync {
    async fn create_calculation(
        &self,
        data: CreateCalculationData,
    ) -> Result<Calculation, CalculationRepositoryError>;

    async fn update_calculation(
        &self,
        owner: UserId,
        calculation_id: i32,
        data: UpdateCalculationData,
    ) -> Result<Calculation, CalculationRepositoryError>;

    async fn delete_calculation(
        &self,
        owner: UserId,
        calculation_id: i32,
    ) -> Result<(), CalculationRepositoryError>;
}
