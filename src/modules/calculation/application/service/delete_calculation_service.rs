use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    DeleteCalculationError, DeleteCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::{
    CalculationRepository, CalculationRepositoryError,
};

pub struct DeleteCalculationService<R>
where
    R: CalculationRepository,
{
    repository: R,
}

impl<R> DeleteCalculationService<R>
where
    R: CalculationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCalculationUseCase for DeleteCalculationService<R>
where
    R: CalculationRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        calculation_id: i32,
    ) -> Result<(), DeleteCalculationError> {
        self.repository
            .delete_calculation(owner, calculation_id)
            .await
            .map_err(|e| match e {
                CalculationRepositoryError::NotFound => DeleteCalculationError::NotFound,
                CalculationRepositoryError::DatabaseError(msg) => {
                    DeleteCalculationError::RepositoryError(msg)
                }
            })
    }
}
