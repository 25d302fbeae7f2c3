use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_user::{
    LoginError, LoginRequest, LoginRequestSchema, LoginUserResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

/// User login
///
/// Authenticates with a username (or email) and password and returns a bearer access token.
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginRequestSchema,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = LoginUserResponse,
            example = json!({
                "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                "token_type": "bearer",
                "user": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "johndoe",
                    "email": "john@example.com",
                    "first_name": "John",
                    "last_name": "Doe",
                    "is_active": true,
                    "is_verified": false,
                    "created_at": "2025-03-10T09:15:12Z",
                    "updated_at": "2025-03-10T09:15:12Z"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "error": "Incorrect username or password",
                "code": "INVALID_CREDENTIALS"
            })
        ),
        (status = 422, description = "Missing or empty fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    info!(identifier = %request.identifier(), "Login attempt");

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                username = %response.user.username,
                "User logged in successfully"
            );
            ApiResponse::success(response)
        }

        Err(err @ LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &err.to_string())
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRead;
    use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::load_test_env;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_mock_login_response(username: &str) -> LoginUserResponse {
        let now = Utc::now();
        LoginUserResponse {
            access_token: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.access".to_string(),
            token_type: "bearer".to_string(),
            user: UserRead {
                id: Uuid::new_v4(),
                username: username.to_string(),
                email: "test@example.com".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                is_active: true,
                is_verified: false,
                created_at: now,
                updated_at: now,
            },
        }
    }

    #[derive(Clone)]
    struct MockLoginUserSuccess;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserSuccess {
        async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Ok(create_mock_login_response(request.identifier()))
        }
    }

    #[derive(Clone)]
    struct MockLoginUserFailure(LoginError);

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserFailure {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Err(self.0.clone())
        }
    }

    async fn call(
        use_case: impl ILoginUserUseCase + 'static,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        load_test_env();
        let app_state = TestAppStateBuilder::default()
            .with_login_user(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users/login")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    fn login_json() -> serde_json::Value {
        serde_json::json!({ "username": "testuser", "password": "SecurePass123" })
    }

    #[actix_web::test]
    async fn test_login_user_success() {
        let (status, body) = call(MockLoginUserSuccess, login_json()).await;

        assert_eq!(status, 200);
        assert!(body["access_token"].is_string());
        assert_eq!(body["token_type"], "bearer");
        assert_eq!(body["user"]["username"], "testuser");
        assert!(body["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_login_user_invalid_credentials() {
        let (status, body) =
            call(MockLoginUserFailure(LoginError::InvalidCredentials), login_json()).await;

        assert_eq!(status, 401);
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("incorrect username or password"));
    }

    #[actix_web::test]
    async fn test_login_user_missing_password() {
        let (status, body) = call(
            MockLoginUserSuccess,
            serde_json::json!({ "username": "testuser" }),
        )
        .await;

        assert_eq!(status, 422);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_user_empty_username() {
        let (status, _) = call(
            MockLoginUserSuccess,
            serde_json::json!({ "username": "  ", "password": "SecurePass123" }),
        )
        .await;

        assert_eq!(status, 422);
    }

    #[actix_web::test]
    async fn test_login_user_internal_errors() {
        for err in [
            LoginError::PasswordVerificationFailed("bcrypt failed".to_string()),
            LoginError::TokenGenerationFailed("JWT signing failed".to_string()),
            LoginError::QueryError("Connection pool exhausted".to_string()),
        ] {
            let (status, body) = call(MockLoginUserFailure(err), login_json()).await;
            assert_eq!(status, 500);
            assert_eq!(body["code"], "INTERNAL_ERROR");
        }
    }
}
