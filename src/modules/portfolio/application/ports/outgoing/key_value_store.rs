// src/modules/portfolio/application/ports/outgoing/key_value_store.rs

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Keys are flat names; anything that could escape the store is refused.
    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (durable local key-value storage)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing was ever written under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces any previous value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
