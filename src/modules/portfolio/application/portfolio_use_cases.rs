use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioUseCase, GetPortfolioDocumentUseCase, GetPortfolioViewUseCase, GetThemeUseCase,
    ToggleEditModeUseCase, ToggleThemeUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;
use crate::modules::portfolio::application::services::{
    edit_portfolio_service::EditPortfolioService, get_portfolio_service::GetPortfolioService,
    session::PortfolioSession, theme_service::ThemeService,
    toggle_edit_mode_service::ToggleEditModeService, view_renderer::ViewRenderer,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>,
    pub get_document: Arc<dyn GetPortfolioDocumentUseCase + Send + Sync>,
    pub edit: Arc<dyn EditPortfolioUseCase + Send + Sync>,
    pub toggle_edit_mode: Arc<dyn ToggleEditModeUseCase + Send + Sync>,
    pub get_theme: Arc<dyn GetThemeUseCase + Send + Sync>,
    pub toggle_theme: Arc<dyn ToggleThemeUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    /// Wires every use case against one shared session.
    pub fn from_session<S>(session: Arc<PortfolioSession<S>>, renderer: ViewRenderer) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let get_service = Arc::new(GetPortfolioService::new(Arc::clone(&session), renderer));
        let theme_service = Arc::new(ThemeService::new(Arc::clone(&session)));

        Self {
            get_view: get_service.clone(),
            get_document: get_service,
            edit: Arc::new(EditPortfolioService::new(Arc::clone(&session), renderer)),
            toggle_edit_mode: Arc::new(ToggleEditModeService::new(session, renderer)),
            get_theme: theme_service.clone(),
            toggle_theme: theme_service,
        }
    }
}
