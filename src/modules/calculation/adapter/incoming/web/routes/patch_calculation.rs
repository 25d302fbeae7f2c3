use actix_web::{patch, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::domain::CalculationError;
use crate::modules::calculation::application::ports::incoming::use_cases::PatchCalculationError;
use crate::modules::calculation::application::schemas::{CalculationRead, CalculationUpdate};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partially update a calculation
///
/// Omitted fields keep their stored value. The result is recomputed from the
/// merged operands; a `result` in the body is ignored.
#[utoipa::path(
    patch,
    path = "/calculations/{calculation_id}",
    tag = "calculations",
    params(("calculation_id" = i32, Path, description = "Calculation id")),
    request_body = CalculationUpdate,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Calculation updated", body = CalculationRead),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Calculation not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/calculations/{calculation_id}")]
pub async fn patch_calculation_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<CalculationUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let calculation_id = path.into_inner();
    let owner = user.owner();

    match data
        .calculation
        .patch
        .execute(owner, calculation_id, req.into_inner())
        .await
    {
        Ok(calc) => {
            info!(calculation_id, owner = %owner, "Calculation updated");
            match super::to_read(calc) {
                Ok(read) => ApiResponse::success(read),
                Err(resp) => resp,
            }
        }

        Err(PatchCalculationError::NotFound) => super::not_found(),

        Err(PatchCalculationError::Validation(e)) => {
            ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string())
        }

        Err(PatchCalculationError::Calculation(e @ CalculationError::Overflow)) => {
            ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string())
        }

        Err(PatchCalculationError::Calculation(e)) => {
            error!(calculation_id, error = %e, "Stored calculation cannot be evaluated");
            ApiResponse::internal_error()
        }

        Err(PatchCalculationError::RepositoryError(e)) => {
            error!(calculation_id, error = %e, "Repository error updating calculation");
            ApiResponse::internal_error()
        }
    }
}
