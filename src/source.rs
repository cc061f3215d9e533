//! Cost record source boundary
//!
//! The billing API is an external collaborator: it receives a calendar-day
//! window and returns the raw cost lines covering it. The trait keeps the
//! pipeline testable without a live endpoint.

use crate::error::Result;
use crate::types::{RawCostLine, ReportWindow};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Trait for billing data sources
#[async_trait]
pub trait CostSource: Send + Sync {
    /// Fetch all raw cost lines for the given window
    async fn fetch(&self, window: &ReportWindow) -> Result<Vec<RawCostLine>>;
}

/// Wire envelope returned by the billing API
#[derive(Debug, Deserialize)]
struct BillingResponse {
    records: Vec<RawCostLine>,
}

/// HTTP billing API client
///
/// POSTs `{"start", "end"}` (dates as `YYYY-MM-DD`) and expects
/// `{"records": [{"account", "service", "amount"}]}` back. The request is
/// bounded by the client timeout; there is no retry.
pub struct BillingApiSource {
    url: String,
    client: reqwest::Client,
}

impl BillingApiSource {
    /// Create a new billing API client with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl CostSource for BillingApiSource {
    async fn fetch(&self, window: &ReportWindow) -> Result<Vec<RawCostLine>> {
        debug!("Fetching cost records for window {}", window);
        let response = self
            .client
            .post(&self.url)
            .json(&json!({
                "start": window.start.format("%Y-%m-%d").to_string(),
                "end": window.end.format("%Y-%m-%d").to_string(),
            }))
            .send()
            .await?
            .error_for_status()?;

        let body: BillingResponse = response.json().await?;
        debug!("Fetched {} cost records", body.records.len());
        Ok(body.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_response_parsing() {
        let payload = r#"{
            "records": [
                {"account": "1", "service": "EC2", "amount": "10.005"},
                {"account": "2", "service": "S3", "amount": "-0.25"}
            ]
        }"#;
        let body: BillingResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(body.records.len(), 2);
        assert_eq!(body.records[0].service, "EC2");
        assert_eq!(body.records[1].amount, "-0.25");
    }

    #[test]
    fn test_source_creation() {
        let source = BillingApiSource::new("https://billing.example/costs", Duration::from_secs(30));
        assert!(source.is_ok());
    }
}
