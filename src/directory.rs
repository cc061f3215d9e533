//! Account directory boundary
//!
//! Resolves an account identifier to a display name. A missing entry is an
//! expected outcome, never an error: it becomes a sentinel name that is
//! surfaced in the report header rather than hidden.

use crate::error::Result;
use crate::types::AccountId;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Display name used when the directory knows the account but records no name
pub const NO_NAME: &str = "NoName";

/// Display name used when the directory has no entry for the account at all
pub const NO_MATCH: &str = "NoMatch";

/// A directory entry for a known account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Recorded display name, if any
    pub name: Option<String>,
}

/// Trait for account directories
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Look up an account; `None` means the directory has no entry for it
    async fn lookup(&self, account: &AccountId) -> Result<Option<DirectoryEntry>>;
}

/// Map a lookup result onto the display name shown in report headers
///
/// The sentinels are deliberately distinct from an empty string so a report
/// reader can tell "unknown account" from "known but unnamed".
pub fn resolve_name(entry: Option<DirectoryEntry>) -> String {
    match entry {
        None => NO_MATCH.to_string(),
        Some(DirectoryEntry { name: Some(name) }) if !name.is_empty() => name,
        Some(_) => NO_NAME.to_string(),
    }
}

/// Wire record for one directory account
#[derive(Debug, Deserialize)]
struct RawAccount {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

/// Wire envelope returned by the directory endpoint
#[derive(Debug, Deserialize)]
struct DirectoryResponse {
    accounts: Vec<RawAccount>,
}

/// HTTP account directory with a one-shot in-memory cache
///
/// The full directory is fetched once per process and cached; individual
/// lookups never hit the network again.
pub struct HttpDirectory {
    url: String,
    client: reqwest::Client,
    cache: Arc<RwLock<Option<HashMap<String, Option<String>>>>>,
}

impl HttpDirectory {
    /// Create a new directory client with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
            cache: Arc::new(RwLock::new(None)),
        })
    }

    async fn ensure_loaded(&self) -> Result<()> {
        let mut cache = self.cache.write().await;
        if cache.is_some() {
            return Ok(());
        }

        debug!("Fetching account directory from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body: DirectoryResponse = response.json().await?;

        let map: HashMap<String, Option<String>> = body
            .accounts
            .into_iter()
            .map(|account| (account.id, account.name))
            .collect();
        debug!("Cached {} directory entries", map.len());
        *cache = Some(map);
        Ok(())
    }
}

#[async_trait]
impl AccountDirectory for HttpDirectory {
    async fn lookup(&self, account: &AccountId) -> Result<Option<DirectoryEntry>> {
        self.ensure_loaded().await?;

        let cache = self.cache.read().await;
        Ok(cache
            .as_ref()
            .and_then(|map| map.get(account.as_str()))
            .map(|name| DirectoryEntry { name: name.clone() }))
    }
}
