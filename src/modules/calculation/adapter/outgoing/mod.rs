pub mod calculation_query_postgres;
pub mod calculation_repository_postgres;
pub mod sea_orm_entity;

pub use calculation_query_postgres::CalculationQueryPostgres;
pub use calculation_repository_postgres::CalculationRepositoryPostgres;
