use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::Calculation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCalculationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCalculationsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Calculation>, GetCalculationsError>;
}
