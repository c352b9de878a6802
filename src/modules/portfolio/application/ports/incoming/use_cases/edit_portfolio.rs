use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::application::services::session::{SaveStatus, SessionError};
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::modules::portfolio::domain::view::PortfolioView;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditPortfolioError {
    #[error("Edit mode is not active")]
    EditModeInactive,
}

impl From<SessionError> for EditPortfolioError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EditModeInactive => EditPortfolioError::EditModeInactive,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct EditPortfolioOutput {
    pub view: PortfolioView,
    /// `false` when the edit was a no-op (blank or duplicate skill, stale index).
    pub changed: bool,
    pub persistence: SaveStatus,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EditPortfolioUseCase: Send + Sync {
    async fn execute(&self, edit: PortfolioEdit) -> Result<EditPortfolioOutput, EditPortfolioError>;
}
