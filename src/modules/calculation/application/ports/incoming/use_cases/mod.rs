mod create_calculation;
mod delete_calculation;
mod get_calculations;
mod get_single_calculation;
mod patch_calculation;

pub use create_calculation::{CreateCalculationError, CreateCalculationUseCase};
pub use delete_calculation::{DeleteCalculationError, DeleteCalculationUseCase};
pub use get_calculations::{GetCalculationsError, GetCalculationsUseCase};
pub use get_single_calculation::{GetSingleCalculationError, GetSingleCalculationUseCase};
pub use patch_calculation::{PatchCalculationError, PatchCalculationUseCase};
