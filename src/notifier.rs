//! Notification delivery boundary
//!
//! Delivers one report payload per call over a chat webhook. A single
//! attempt, no retry: retries, if wanted, belong to the caller.

use crate::error::{CostwatchError, Result};
use crate::report::Report;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Trait for report delivery transports
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one report
    ///
    /// Errors distinguish an explicit remote rejection
    /// ([`CostwatchError::Rejected`]) from a transport failure
    /// ([`CostwatchError::Network`]).
    async fn send(&self, report: &Report) -> Result<()>;
}

/// Chat webhook notifier
///
/// POSTs `{"text": <report text>}` to the configured webhook URL.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Create a new webhook notifier with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, report: &Report) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "text": report.text() }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| String::new());
            return Err(CostwatchError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        debug!("Delivered report for account {}", report.account);
        Ok(())
    }
}
