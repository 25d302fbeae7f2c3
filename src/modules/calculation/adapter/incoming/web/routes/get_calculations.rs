use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::GetCalculationsError;
use crate::modules::calculation::application::schemas::CalculationRead;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's calculations, newest first
#[utoipa::path(
    get,
    path = "/calculations",
    tag = "calculations",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Calculations of the caller", body = Vec<CalculationRead>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/calculations")]
pub async fn get_calculations_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = user.owner();

    match data.calculation.get_list.execute(owner).await {
        Ok(calculations) => {
            let read: Result<Vec<CalculationRead>, _> =
                calculations.into_iter().map(super::to_read).collect();
            match read {
                Ok(items) => ApiResponse::success(items),
                Err(resp) => resp,
            }
        }

        Err(GetCalculationsError::RepositoryError(e)) => {
            error!(owner = %owner, error = %e, "Repository error listing calculations");
            ApiResponse::internal_error()
        }
    }
}
