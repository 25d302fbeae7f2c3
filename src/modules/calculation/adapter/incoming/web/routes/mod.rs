mod create_calculation;
mod delete_calculation;
mod get_calculations;
mod get_single_calculation;
mod patch_calculation;

pub use create_calculation::{create_calculation_handler, __path_create_calculation_handler};
pub use delete_calculation::{delete_calculation_handler, __path_delete_calculation_handler};
pub use get_calculations::{get_calculations_handler, __path_get_calculations_handler};
pub use get_single_calculation::{get_single_calculation_handler, __path_get_single_calculation_handler};
pub use patch_calculation::{patch_calculation_handler, __path_patch_calculation_handler};

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::calculation::application::domain::Calculation;
use crate::modules::calculation::application::schemas::CalculationRead;
use crate::shared::api::ApiResponse;

/// Project a stored record for the client. A row carrying an unknown tag is a
/// server-side data problem, reported as 500.
fn to_read(calc: Calculation) -> Result<CalculationRead, HttpResponse> {
    let id = calc.id;
    CalculationRead::try_from(calc).map_err(|e| {
        error!(calculation_id = id, error = %e, "Stored calculation cannot be projected");
        ApiResponse::internal_error()
    })
}

fn not_found() -> HttpResponse {
    ApiResponse::not_found("CALCULATION_NOT_FOUND", "Calculation not found")
}
