use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::view::PortfolioView;

/// Rendered page for the current snapshot, mode and theme.
#[async_trait]
pub trait GetPortfolioViewUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioView;
}

/// Raw current snapshot, as it would be stored.
#[async_trait]
pub trait GetPortfolioDocumentUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioDocument;
}
