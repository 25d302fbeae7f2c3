use crate::auth::application::use_cases::{
    create_user::ICreateUserUseCase, login_user::ILoginUserUseCase,
};
use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationUseCase, DeleteCalculationUseCase, GetCalculationsUseCase,
    GetSingleCalculationUseCase, PatchCalculationUseCase,
};
use crate::modules::calculation::application::CalculationUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    calculation: CalculationUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubCreateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            calculation: CalculationUseCases {
                create: Arc::new(StubCreateCalculationUseCase),
                get_list: Arc::new(StubGetCalculationsUseCase),
                get_single: Arc::new(StubGetSingleCalculationUseCase),
                patch: Arc::new(StubPatchCalculationUseCase),
                delete: Arc::new(StubDeleteCalculationUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl ICreateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_create_calculation<U>(mut self, uc: U) -> Self
    where
        U: CreateCalculationUseCase + Send + Sync + 'static,
    {
        self.calculation.create = Arc::new(uc);
        self
    }

    pub fn with_get_calculations<U>(mut self, uc: U) -> Self
    where
        U: GetCalculationsUseCase + Send + Sync + 'static,
    {
        self.calculation.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_calculation<U>(mut self, uc: U) -> Self
    where
        U: GetSingleCalculationUseCase + Send + Sync + 'static,
    {
        self.calculation.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_calculation<U>(mut self, uc: U) -> Self
    where
        U: PatchCalculationUseCase + Send + Sync + 'static,
    {
        self.calculation.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_calculation<U>(mut self, uc: U) -> Self
    where
        U: DeleteCalculationUseCase + Send + Sync + 'static,
    {
        self.calculation.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            calculation: self.calculation,
        })
    }
}
