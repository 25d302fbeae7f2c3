use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::CreateCalculationError;
use crate::modules::calculation::application::schemas::{
    CalculationCreate, CalculationCreateSchema, CalculationRead,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a calculation
///
/// Computes the result for the given operands and stores it for the caller.
#[utoipa::path(
    post,
    path = "/calculations",
    tag = "calculations",
    request_body = CalculationCreateSchema,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Calculation created", body = CalculationRead),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 422,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "error": "b cannot be zero for Divide operations",
                "code": "VALIDATION_ERROR"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/calculations")]
pub async fn create_calculation_handler(
    user: AuthenticatedUser,
    req: web::Json<CalculationCreate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = user.owner();

    match data.calculation.create.execute(owner, req.into_inner()).await {
        Ok(calc) => {
            info!(calculation_id = calc.id, owner = %owner, "Calculation created");
            match super::to_read(calc) {
                Ok(read) => ApiResponse::created(read),
                Err(resp) => resp,
            }
        }

        Err(CreateCalculationError::Calculation(e)) => {
            ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string())
        }

        Err(CreateCalculationError::RepositoryError(e)) => {
            error!(owner = %owner, error = %e, "Repository error creating calculation");
            ApiResponse::internal_error()
        }
    }
}
