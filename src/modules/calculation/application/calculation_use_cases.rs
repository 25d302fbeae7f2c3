use std::sync::Arc;

use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationUseCase, DeleteCalculationUseCase, GetCalculationsUseCase,
    GetSingleCalculationUseCase, PatchCalculationUseCase,
};

#[derive(Clone)]
pub struct CalculationUseCases {
    pub create: Arc<dyn CreateCalculationUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCalculationsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCalculationUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCalculationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCalculationUseCase + Send + Sync>,
}
