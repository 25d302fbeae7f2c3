pub mod calculation_query;
pub mod calculation_repository;

pub use calculation_query::{CalculationQuery, CalculationQueryError};
pub use calculation_repository::{
    CalculationRepository, CalculationRepositoryError, CreateCalculationData,
    UpdateCalculationData,
};
