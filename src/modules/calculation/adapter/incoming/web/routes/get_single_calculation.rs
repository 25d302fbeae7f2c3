use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::GetSingleCalculationError;
use crate::modules::calculation::application::schemas::CalculationRead;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one of the caller's calculations
#[utoipa::path(
    get,
    path = "/calculations/{calculation_id}",
    tag = "calculations",
    params(("calculation_id" = i32, Path, description = "Calculation id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Calculation found", body = CalculationRead),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 404,
            description = "Calculation not found",
            body = ErrorResponse,
            example = json!({
                "error": "Calculation not found",
                "code": "CALCULATION_NOT_FOUND"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/calculations/{calculation_id}")]
pub async fn get_single_calculation_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let calculation_id = path.into_inner();

    match data
        .calculation
        .get_single
        .execute(user.owner(), calculation_id)
        .await
    {
        Ok(calc) => match super::to_read(calc) {
            Ok(read) => ApiResponse::success(read),
            Err(resp) => resp,
        },

        Err(GetSingleCalculationError::NotFound) => super::not_found(),

        Err(GetSingleCalculationError::RepositoryError(e)) => {
            error!(calculation_id, error = %e, "Repository error fetching calculation");
            ApiResponse::internal_error()
        }
    }
}
