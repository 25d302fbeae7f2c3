use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "calculation-api-test".to_string(),
        access_token_expiry: 1800,
    }
}

/// Token provider in the shape the auth extractor looks up
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(test_jwt_config()));
    web::Data::new(provider)
}

/// `Authorization` header value for a freshly issued access token
pub fn bearer_for(user_id: Uuid) -> String {
    let token = JwtTokenService::new(test_jwt_config())
        .generate_access_token(user_id)
        .expect("test token should encode");
    format!("Bearer {token}")
}
