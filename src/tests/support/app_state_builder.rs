use std::sync::Arc;

use actix_web::web;

use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioUseCase, GetPortfolioDocumentUseCase, GetPortfolioViewUseCase, GetThemeUseCase,
    ToggleEditModeUseCase, ToggleThemeUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get_view: Arc::new(StubGetPortfolioViewUseCase::default()),
                get_document: Arc::new(StubGetPortfolioDocumentUseCase::default()),
                edit: Arc::new(RecordingEditPortfolioUseCase::success()),
                toggle_edit_mode: Arc::new(StubToggleEditModeUseCase::default()),
                get_theme: Arc::new(StubGetThemeUseCase::default()),
                toggle_theme: Arc::new(StubToggleThemeUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_view(
        mut self,
        uc: impl GetPortfolioViewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_view = Arc::new(uc);
        self
    }

    pub fn with_get_document(
        mut self,
        uc: impl GetPortfolioDocumentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_document = Arc::new(uc);
        self
    }

    pub fn with_edit(mut self, uc: impl EditPortfolioUseCase + Send + Sync + 'static) -> Self {
        self.portfolio.edit = Arc::new(uc);
        self
    }

    pub fn with_toggle_edit_mode(
        mut self,
        uc: impl ToggleEditModeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.toggle_edit_mode = Arc::new(uc);
        self
    }

    pub fn with_get_theme(mut self, uc: impl GetThemeUseCase + Send + Sync + 'static) -> Self {
        self.portfolio.get_theme = Arc::new(uc);
        self
    }

    pub fn with_toggle_theme(
        mut self,
        uc: impl ToggleThemeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.toggle_theme = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
        })
    }
}
