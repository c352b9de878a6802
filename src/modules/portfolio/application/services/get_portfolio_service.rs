use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioDocumentUseCase, GetPortfolioViewUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;
use crate::modules::portfolio::application::services::session::PortfolioSession;
use crate::modules::portfolio::application::services::view_renderer::ViewRenderer;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::view::PortfolioView;

pub struct GetPortfolioService<S>
where
    S: KeyValueStore,
{
    session: Arc<PortfolioSession<S>>,
    renderer: ViewRenderer,
}

impl<S> GetPortfolioService<S>
where
    S: KeyValueStore,
{
    pub fn new(session: Arc<PortfolioSession<S>>, renderer: ViewRenderer) -> Self {
        Self { session, renderer }
    }
}

#[async_trait]
impl<S> GetPortfolioViewUseCase for GetPortfolioService<S>
where
    S: KeyValueStore,
{
    async fn execute(&self) -> PortfolioView {
        let snapshot = self.session.snapshot().await;
        self.renderer.render(&snapshot)
    }
}

#[async_trait]
impl<S> GetPortfolioDocumentUseCase for GetPortfolioService<S>
where
    S: KeyValueStore,
{
    async fn execute(&self) -> PortfolioDocument {
        self.session.snapshot().await.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::adapter::outgoing::InMemoryKeyValueStore;
    use crate::modules::portfolio::application::services::persistence::PortfolioPersistence;
    use crate::modules::portfolio::domain::edit_mode::EditMode;

    async fn service() -> GetPortfolioService<InMemoryKeyValueStore> {
        let persistence = PortfolioPersistence::new(InMemoryKeyValueStore::new());
        let session = Arc::new(PortfolioSession::hydrate(persistence).await);
        GetPortfolioService::new(session, ViewRenderer::default())
    }

    #[tokio::test]
    async fn view_reflects_default_snapshot_in_viewing_mode() {
        let service = service().await;

        let view = GetPortfolioViewUseCase::execute(&service).await;

        assert_eq!(view.mode, EditMode::Viewing);
        assert_eq!(view.header.name.value(), "Your Name");
    }

    #[tokio::test]
    async fn document_is_the_raw_snapshot() {
        let service = service().await;

        let doc = GetPortfolioDocumentUseCase::execute(&service).await;

        assert_eq!(doc, PortfolioDocument::default());
    }
}
