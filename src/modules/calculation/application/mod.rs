pub mod calculation_use_cases;
pub mod domain;
pub mod ports;
pub mod schemas;
pub mod service;

pub use calculation_use_cases::CalculationUseCases;
