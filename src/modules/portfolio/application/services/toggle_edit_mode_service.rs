use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::ToggleEditModeUseCase;
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;
use crate::modules::portfolio::application::services::session::PortfolioSession;
use crate::modules::portfolio::application::services::view_renderer::ViewRenderer;
use crate::modules::portfolio::domain::view::PortfolioView;

pub struct ToggleEditModeService<S>
where
    S: KeyValueStore,
{
    session: Arc<PortfolioSession<S>>,
    renderer: ViewRenderer,
}

impl<S> ToggleEditModeService<S>
where
    S: KeyValueStore,
{
    pub fn new(session: Arc<PortfolioSession<S>>, renderer: ViewRenderer) -> Self {
        Self { session, renderer }
    }
}

#[async_trait]
impl<S> ToggleEditModeUseCase for ToggleEditModeService<S>
where
    S: KeyValueStore,
{
    async fn execute(&self) -> PortfolioView {
        let snapshot = self.session.toggle_edit_mode().await;
        self.renderer.render(&snapshot)
    }
}
