use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::application::services::session::SaveStatus;
use crate::modules::portfolio::domain::theme::ThemePreference;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ThemeOutput {
    pub theme: ThemePreference,
    pub persistence: SaveStatus,
}

#[async_trait]
pub trait GetThemeUseCase: Send + Sync {
    async fn execute(&self) -> ThemePreference;
}

#[async_trait]
pub trait ToggleThemeUseCase: Send + Sync {
    async fn execute(&self) -> ThemeOutput;
}
