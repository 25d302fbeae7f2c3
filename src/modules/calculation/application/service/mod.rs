mod create_calculation_service;
mod delete_calculation_service;
mod get_calculations_service;
mod get_single_calculation_service;
mod patch_calculation_service;

pub use create_calculation_service::CreateCalculationService;
pub use delete_calculation_service::DeleteCalculationService;
pub use get_calculations_service::GetCalculationsService;
pub use get_single_calculation_service::GetSingleCalculationService;
pub use patch_calculation_service::PatchCalculationService;
