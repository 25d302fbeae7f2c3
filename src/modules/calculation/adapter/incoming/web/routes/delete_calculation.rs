use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::DeleteCalculationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete one of the caller's calculations
#[utoipa::path(
    delete,
    path = "/calculations/{calculation_id}",
    tag = "calculations",
    params(("calculation_id" = i32, Path, description = "Calculation id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Calculation deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Calculation not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/calculations/{calculation_id}")]
pub async fn delete_calculation_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let calculation_id = path.into_inner();
    let owner = user.owner();

    match data.calculation.delete.execute(owner, calculation_id).await {
        Ok(()) => {
            info!(calculation_id, owner = %owner, "Calculation deleted");
            ApiResponse::no_content()
        }

        Err(DeleteCalculationError::NotFound) => super::not_found(),

        Err(DeleteCalculationError::RepositoryError(e)) => {
            error!(calculation_id, error = %e, "Repository error deleting calculation");
            ApiResponse::internal_error()
        }
    }
}
