use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::{Calculation, CalculationFactory};
use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationError, CreateCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::{
    CalculationRepository, CreateCalculationData,
};
use crate::modules::calculation::application::schemas::CalculationCreate;

pub struct CreateCalculationService<R>
where
    R: CalculationRepository,
{
    repository: R,
}

impl<R> CreateCalculationService<R>
where
    R: CalculationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCalculationUseCase for CreateCalculationService<R>
where
    R: CalculationRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: CalculationCreate,
    ) -> Result<Calculation, CreateCalculationError> {
        let result = CalculationFactory::apply(input.calculation_type(), input.a(), input.b())?;

        debug!(
            owner = %owner,
            kind = %input.calculation_type(),
            result,
            "Computed calculation"
        );

        self.repository
            .create_calculation(CreateCalculationData {
                owner,
                a: input.a(),
                b: input.b(),
                calculation_type: input.calculation_type(),
                result,
            })
            .await
            .map_err(|e| CreateCalculationError::RepositoryError(e.to_string()))
    }
}
