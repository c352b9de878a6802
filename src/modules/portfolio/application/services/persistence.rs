use tracing::{debug, warn};

use crate::modules::portfolio::application::ports::outgoing::{KeyValueStore, StoreError};
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::theme::ThemePreference;

pub const DOCUMENT_KEY: &str = "portfolioData";
pub const THEME_KEY: &str = "theme";

/// Outcome of reading a stored value, before any fallback is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Restored(T),
    Missing,
    Corrupt { reason: String },
}

impl<T: Default> Decoded<T> {
    /// Falls back to the default for a missing or unreadable value.
    pub fn or_default(self) -> T {
        match self {
            Decoded::Restored(value) => value,
            Decoded::Missing | Decoded::Corrupt { .. } => T::default(),
        }
    }
}

pub type DocumentLoad = Decoded<PortfolioDocument>;
pub type ThemeLoad = Decoded<ThemePreference>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to encode portfolio document: {0}")]
    Encode(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Mirrors the document and the theme preference to a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct PortfolioPersistence<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> PortfolioPersistence<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn decode_document(&self) -> DocumentLoad {
        match self.store.get(DOCUMENT_KEY).await {
            Ok(None) => Decoded::Missing,
            Ok(Some(raw)) => match serde_json::from_str::<PortfolioDocument>(&raw) {
                Ok(doc) => Decoded::Restored(doc),
                Err(err) => Decoded::Corrupt {
                    reason: err.to_string(),
                },
            },
            Err(err) => Decoded::Corrupt {
                reason: err.to_string(),
            },
        }
    }

    /// Never fails: an unreadable record is logged and replaced by the default.
    pub async fn load(&self) -> PortfolioDocument {
        let decoded = self.decode_document().await;
        match &decoded {
            Decoded::Restored(_) => debug!("Restored portfolio document from store"),
            Decoded::Missing => debug!("No stored portfolio document, using default"),
            Decoded::Corrupt { reason } => {
                warn!("Error loading portfolio data, using default: {}", reason)
            }
        }
        decoded.or_default()
    }

    pub async fn save(&self, doc: &PortfolioDocument) -> Result<(), PersistenceError> {
        let raw =
            serde_json::to_string(doc).map_err(|err| PersistenceError::Encode(err.to_string()))?;
        self.store.set(DOCUMENT_KEY, &raw).await?;
        Ok(())
    }

    pub async fn decode_theme(&self) -> ThemeLoad {
        match self.store.get(THEME_KEY).await {
            Ok(None) => Decoded::Missing,
            Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
                Ok(theme) => Decoded::Restored(theme),
                Err(err) => Decoded::Corrupt {
                    reason: err.to_string(),
                },
            },
            Err(err) => Decoded::Corrupt {
                reason: err.to_string(),
            },
        }
    }

    pub async fn load_theme(&self) -> ThemePreference {
        let decoded = self.decode_theme().await;
        if let Decoded::Corrupt { reason } = &decoded {
            warn!("Error loading theme preference, using light: {}", reason);
        }
        decoded.or_default()
    }

    pub async fn save_theme(&self, theme: ThemePreference) -> Result<(), PersistenceError> {
        self.store.set(THEME_KEY, theme.as_str()).await?;
        Ok(())
    }
}
