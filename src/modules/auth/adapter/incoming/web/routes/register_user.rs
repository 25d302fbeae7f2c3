use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::UserRead;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

fn map_create_user_error(err: CreateUserError, username: &str, email: &str) -> HttpResponse {
    match &err {
        e if e.is_validation() => {
            warn!(username = %username, email = %email, error = %err, "Invalid registration input");
            ApiResponse::unprocessable("VALIDATION_ERROR", &err.to_string())
        }

        CreateUserError::UsernameAlreadyExists => {
            warn!(username = %username, "Username already exists");
            ApiResponse::bad_request("USERNAME_ALREADY_EXISTS", &err.to_string())
        }

        CreateUserError::EmailAlreadyExists => {
            warn!(email = %email, "Email already exists");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", &err.to_string())
        }

        other => {
            error!(
                username = %username,
                email = %email,
                error = %other,
                "Unhandled user creation error"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Stores a hashed credential and returns the public user projection.
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "users",
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "User created successfully", body = UserRead),
        (
            status = 400,
            description = "Username or email already taken",
            body = ErrorResponse,
            example = json!({
                "error": "Username already exists",
                "code": "USERNAME_ALREADY_EXISTS"
            })
        ),
        (
            status = 422,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "error": "Invalid email format",
                "code": "VALIDATION_ERROR"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = req.into_inner();
    let username = input.username.clone();
    let email = input.email.clone();

    info!(username = %username, email = %email, "Registration attempt");

    match data.register_user_use_case.execute(input).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User registered");
            ApiResponse::created(UserRead::from(user))
        }
        Err(err) => map_create_user_error(err, &username, &email),
    }
}
