use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;
use crate::modules::portfolio::application::services::persistence::PortfolioPersistence;
use crate::modules::portfolio::domain::edit_mode::EditMode;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::modules::portfolio::domain::theme::ThemePreference;

/// Result of the write-through that follows a state change.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveStatus {
    Saved,
    /// Nothing changed, so nothing was written.
    Unchanged,
    /// The in-memory state moved on but the store did not.
    Failed { reason: String },
}

/// Point-in-time copy of everything the session tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub document: PortfolioDocument,
    pub mode: EditMode,
    pub theme: ThemePreference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub snapshot: SessionSnapshot,
    pub changed: bool,
    pub save: SaveStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Edit mode is not active")]
    EditModeInactive,
}

struct SessionState {
    document: PortfolioDocument,
    mode: EditMode,
    theme: ThemePreference,
}

impl SessionState {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            document: self.document.clone(),
            mode: self.mode,
            theme: self.theme,
        }
    }
}

/// Owns the current document snapshot, edit mode and theme for one user.
///
/// All updates go through one lock, so every change is applied to the latest
/// snapshot and followed by exactly one store write.
pub struct PortfolioSession<S>
where
    S: KeyValueStore,
{
    persistence: PortfolioPersistence<S>,
    state: Mutex<SessionState>,
    documents: watch::Sender<PortfolioDocument>,
}

impl<S> PortfolioSession<S>
where
    S: KeyValueStore,
{
    /// Restores document and theme from the store, falling back to defaults.
    pub async fn hydrate(persistence: PortfolioPersistence<S>) -> Self {
        let document = persistence.load().await;
        let theme = persistence.load_theme().await;
        if theme.is_dark() {
            info!("Restored dark theme");
        }
        Self::with_state(persistence, document, theme)
    }

    pub fn with_state(
        persistence: PortfolioPersistence<S>,
        document: PortfolioDocument,
        theme: ThemePreference,
    ) -> Self {
        let (documents, _) = watch::channel(document.clone());
        Self {
            persistence,
            state: Mutex::new(SessionState {
                document,
                mode: EditMode::default(),
                theme,
            }),
            documents,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Receives every committed document snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PortfolioDocument> {
        self.documents.subscribe()
    }

    /// Replaces the document with `f(current)` and saves it if it changed.
    pub async fn update<F>(&self, f: F) -> UpdateOutcome
    where
        F: FnOnce(&PortfolioDocument) -> PortfolioDocument,
    {
        let mut state = self.state.lock().await;
        self.commit(&mut state, f).await
    }

    /// Applies a user edit; refused unless edit mode is on.
    pub async fn apply_edit(&self, edit: &PortfolioEdit) -> Result<UpdateOutcome, SessionError> {
        let mut state = self.state.lock().await;
        if !state.mode.is_editing() {
            return Err(SessionError::EditModeInactive);
        }
        Ok(self.commit(&mut state, |doc| edit.apply(doc)).await)
    }

    pub async fn toggle_edit_mode(&self) -> SessionSnapshot {
        let mut state = self.state.lock().await;
        state.mode = state.mode.toggled();
        info!("Edit mode is now {:?}", state.mode);
        state.snapshot()
    }

    pub async fn toggle_theme(&self) -> (SessionSnapshot, SaveStatus) {
        let mut state = self.state.lock().await;
        state.theme = state.theme.toggled();
        info!("Theme switched to {}", state.theme);

        let save = match self.persistence.save_theme(state.theme).await {
            Ok(()) => SaveStatus::Saved,
            Err(err) => {
                error!("Failed to persist theme preference: {}", err);
                SaveStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };
        (state.snapshot(), save)
    }

    async fn commit<F>(&self, state: &mut SessionState, f: F) -> UpdateOutcome
    where
        F: FnOnce(&PortfolioDocument) -> PortfolioDocument,
    {
        let next = f(&state.document);
        if next == state.document {
            return UpdateOutcome {
                snapshot: state.snapshot(),
                changed: false,
                save: SaveStatus::Unchanged,
            };
        }

        state.document = next;
        let save = match self.persistence.save(&state.document).await {
            Ok(()) => SaveStatus::Saved,
            Err(err) => {
                error!("Failed to persist portfolio document: {}", err);
                SaveStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };
        self.documents.send_replace(state.document.clone());

        UpdateOutcome {
            snapshot: state.snapshot(),
            changed: true,
            save,
        }
    }
}
