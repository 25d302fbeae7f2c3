use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::application::domain::entities::UserRead;
use crate::auth::application::use_cases::create_user::CreateUserInput;
use crate::auth::application::use_cases::login_user::{LoginRequestSchema, LoginUserResponse};
use crate::modules::calculation::application::domain::CalculationType;
use crate::modules::calculation::application::schemas::{
    CalculationCreateSchema, CalculationRead, CalculationUpdate,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculation API",
        version = "1.0.0",
        description = "User accounts and per-user arithmetic calculation records"
    ),
    paths(
        // User endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Calculation endpoints
        crate::modules::calculation::adapter::incoming::web::routes::create_calculation_handler,
        crate::modules::calculation::adapter::incoming::web::routes::get_calculations_handler,
        crate::modules::calculation::adapter::incoming::web::routes::get_single_calculation_handler,
        crate::modules::calculation::adapter::incoming::web::routes::patch_calculation_handler,
        crate::modules::calculation::adapter::incoming::web::routes::delete_calculation_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // User DTOs
            CreateUserInput,
            UserRead,
            LoginRequestSchema,
            LoginUserResponse,

            // Calculation DTOs
            CalculationType,
            CalculationCreateSchema,
            CalculationUpdate,
            CalculationRead
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Registration and login"),
        (name = "calculations", description = "Calculation records of the authenticated user"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /users/login"))
                        .build(),
                ),
            )
        }
    }
}
