use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioOutput, EditPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;
use crate::modules::portfolio::application::services::session::PortfolioSession;
use crate::modules::portfolio::application::services::view_renderer::ViewRenderer;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;

pub struct EditPortfolioService<S>
where
    S: KeyValueStore,
{
    session: Arc<PortfolioSession<S>>,
    renderer: ViewRenderer,
}

impl<S> EditPortfolioService<S>
where
    S: KeyValueStore,
{
    pub fn new(session: Arc<PortfolioSession<S>>, renderer: ViewRenderer) -> Self {
        Self { session, renderer }
    }
}

#[async_trait]
impl<S> EditPortfolioUseCase for EditPortfolioService<S>
where
    S: KeyValueStore,
{
    async fn execute(&self, edit: PortfolioEdit) -> Result<EditPortfolioOutput, EditPortfolioError> {
        let outcome = self.session.apply_edit(&edit).await?;
        Ok(EditPortfolioOutput {
            view: self.renderer.render(&outcome.snapshot),
            changed: outcome.changed,
            persistence: outcome.save,
        })
    }
}
