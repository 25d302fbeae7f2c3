use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

/// Length bounds plus one uppercase, one lowercase and one digit.
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();

        if length < MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort(MIN_LENGTH));
        }

        if length > MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong(MAX_LENGTH));
        }

        let has_upper = password.chars().any(|c| c.is_uppercase());
        let has_lower = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        if !(has_upper && has_lower && has_digit) {
            return Err(PasswordPolicyError::TooWeak);
        }

        Ok(())
    }
}
