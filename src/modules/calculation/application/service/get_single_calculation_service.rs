use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::Calculation;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    GetSingleCalculationError, GetSingleCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::CalculationQuery;

pub struct GetSingleCalculationService<Q>
where
    Q: CalculationQuery,
{
    query: Q,
}

impl<Q> GetSingleCalculationService<Q>
where
    Q: CalculationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCalculationUseCase for GetSingleCalculationService<Q>
where
    Q: CalculationQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        calculation_id: i32,
    ) -> Result<Calculation, GetSingleCalculationError> {
        self.query
            .find_by_id(owner, calculation_id)
            .await
            .map_err(|e| GetSingleCalculationError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleCalculationError::NotFound)
    }
}
