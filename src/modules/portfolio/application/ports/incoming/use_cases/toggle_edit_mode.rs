use async_trait::async_trait;

use crate::modules::portfolio::domain::view::PortfolioView;

/// Flips the global edit switch and returns the page as it now renders.
#[async_trait]
pub trait ToggleEditModeUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioView;
}
