pub trait PasswordPolicy: Send + Sync {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {0} characters long")]
    TooShort(usize),

    #[error("Password must be at most {0} characters long")]
    TooLong(usize),

    #[error("Password must contain at least one uppercase letter, one lowercase letter and one digit")]
    TooWeak,
}
