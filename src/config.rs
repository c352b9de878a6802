use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};

use crate::modules::portfolio::domain::visibility::VisibilityPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub store_dir: PathBuf,
    pub visibility: VisibilityPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => 8080,
        };

        let store = match lookup("PORTFOLIO_STORE").as_deref() {
            None | Some("file") => StoreKind::File,
            Some("memory") => StoreKind::Memory,
            Some(other) => bail!("PORTFOLIO_STORE must be `file` or `memory`, got `{other}`"),
        };

        let store_dir = lookup("PORTFOLIO_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".portfolio-store"));

        let reveal = match lookup("PORTFOLIO_REVEAL_EMPTY_SECTIONS_WHILE_EDITING") {
            Some(raw) => raw.parse::<bool>().with_context(|| {
                format!("Invalid PORTFOLIO_REVEAL_EMPTY_SECTIONS_WHILE_EDITING value: {raw}")
            })?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            store,
            store_dir,
            visibility: if reveal {
                VisibilityPolicy::RevealWhileEditing
            } else {
                VisibilityPolicy::ContentOnly
            },
        })
    }
}
