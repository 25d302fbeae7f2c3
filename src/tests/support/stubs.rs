use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::calculation::application::domain::Calculation;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationError, CreateCalculationUseCase, DeleteCalculationError,
    DeleteCalculationUseCase, GetCalculationsError, GetCalculationsUseCase,
    GetSingleCalculationError, GetSingleCalculationUseCase, PatchCalculationError,
    PatchCalculationUseCase,
};
use crate::modules::calculation::application::schemas::{CalculationCreate, CalculationUpdate};

/// Stored record with the given operands and no result
pub fn sample_calculation(owner: UserId, id: i32, tag: &str, a: f64, b: f64) -> Calculation {
    let now = Utc::now();
    Calculation {
        id,
        owner: Some(owner),
        a,
        b,
        calculation_type: tag.to_string(),
        result: None,
        created_at: now,
        updated_at: now,
    }
}

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<User, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Calculation
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateCalculationUseCase;

#[async_trait]
impl CreateCalculationUseCase for StubCreateCalculationUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _input: CalculationCreate,
    ) -> Result<Calculation, CreateCalculationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCalculationsUseCase;

#[async_trait]
impl GetCalculationsUseCase for StubGetCalculationsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Calculation>, GetCalculationsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleCalculationUseCase;

#[async_trait]
impl GetSingleCalculationUseCase for StubGetSingleCalculationUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _calculation_id: i32,
    ) -> Result<Calculation, GetSingleCalculationError> {
        Err(GetSingleCalculationError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubPatchCalculationUseCase;

#[async_trait]
impl PatchCalculationUseCase for StubPatchCalculationUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _calculation_id: i32,
        _update: CalculationUpdate,
    ) -> Result<Calculation, PatchCalculationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCalculationUseCase;

#[async_trait]
impl DeleteCalculationUseCase for StubDeleteCalculationUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _calculation_id: i32,
    ) -> Result<(), DeleteCalculationError> {
        Err(DeleteCalculationError::NotFound)
    }
}
