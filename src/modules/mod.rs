pub mod auth;
pub mod calculation;
