use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetThemeUseCase, ThemeOutput, ToggleThemeUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;
use crate::modules::portfolio::application::services::session::PortfolioSession;
use crate::modules::portfolio::domain::theme::ThemePreference;

pub struct ThemeService<S>
where
    S: KeyValueStore,
{
    session: Arc<PortfolioSession<S>>,
}

impl<S> ThemeService<S>
where
    S: KeyValueStore,
{
    pub fn new(session: Arc<PortfolioSession<S>>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl<S> GetThemeUseCase for ThemeService<S>
where
    S: KeyValueStore,
{
    async fn execute(&self) -> ThemePreference {
        self.session.snapshot().await.theme
    }
}

#[async_trait]
impl<S> ToggleThemeUseCase for ThemeService<S>
where
    S: KeyValueStore,
{
    async fn execute(&self) -> ThemeOutput {
        let (snapshot, persistence) = self.session.toggle_theme().await;
        ThemeOutput {
            theme: snapshot.theme,
            persistence,
        }
    }
}
