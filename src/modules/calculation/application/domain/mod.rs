pub mod calculation_factory;
pub mod entities;

pub use calculation_factory::{CalculationError, CalculationFactory};
pub use entities::{Calculation, CalculationType};
