//! Run orchestration: window → fetch → aggregate → report → notify
//!
//! One invocation processes one window and carries no state across runs.
//! Within a run, each account is delivered independently: one account's
//! failure is recorded and logged but never aborts the batch.

use crate::aggregation::aggregate;
use crate::directory::{resolve_name, AccountDirectory};
use crate::error::{CostwatchError, Result};
use crate::notifier::Notifier;
use crate::report::ReportBuilder;
use crate::source::CostSource;
use crate::timezone::TimezoneConfig;
use crate::types::{AccountId, CostRecord, RankedEntry, ReportWindow};
use chrono::{DateTime, Utc};
use futures::future;
use std::time::Duration;
use tracing::{info, warn};

/// Default bound on the two network suspension points (fetch, notify)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable process configuration
///
/// Built once at startup and passed into the orchestrator; core logic never
/// reads ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Billing API endpoint
    pub billing_url: String,
    /// Account directory endpoint
    pub directory_url: String,
    /// Chat webhook endpoint
    pub webhook_url: String,
    /// Maximum ranked categories per account report
    pub top_n: usize,
    /// Reference timezone for window arithmetic
    pub timezone: TimezoneConfig,
    /// Request timeout for the billing fetch and each delivery
    pub timeout: Duration,
}

impl Config {
    /// Fail fast on constraint violations, before any network call
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(CostwatchError::Config(
                "top_n must be a positive integer".to_string(),
            ));
        }
        for (name, value) in [
            ("billing-url", &self.billing_url),
            ("directory-url", &self.directory_url),
            ("webhook-url", &self.webhook_url),
        ] {
            if value.is_empty() {
                return Err(CostwatchError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Window the run covered
    pub window: ReportWindow,
    /// Accounts with cost activity in the window
    pub accounts: usize,
    /// Reports successfully delivered
    pub delivered: usize,
    /// Per-account delivery failures, with the error rendered for logging
    pub failures: Vec<(AccountId, String)>,
}

/// Drives one snapshot run end to end
pub struct Orchestrator<S, D, N> {
    source: S,
    directory: D,
    notifier: N,
    config: Config,
}

impl<S, D, N> Orchestrator<S, D, N>
where
    S: CostSource,
    D: AccountDirectory,
    N: Notifier,
{
    /// Create a new orchestrator over the three external collaborators
    pub fn new(source: S, directory: D, notifier: N, config: Config) -> Self {
        Self {
            source,
            directory,
            notifier,
            config,
        }
    }

    /// Run one snapshot for the window two days in arrears of `now`
    ///
    /// Accounts absent from the source output are skipped entirely: the
    /// source is the only authority on which accounts had activity in the
    /// window, so no empty report is fabricated for anyone else.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunSummary> {
        self.config.validate()?;

        let window = ReportWindow::two_days_in_arrears(now, self.config.timezone.tz);
        info!(
            "Running cost snapshot for window {} ({})",
            window,
            self.config.timezone.name()
        );

        let raw = self.source.fetch(&window).await?;
        let records = raw
            .into_iter()
            .map(CostRecord::from_raw)
            .collect::<Result<Vec<_>>>()?;
        info!("Validated {} cost records", records.len());

        let ranked = aggregate(&records, self.config.top_n)?;

        let mut summary = RunSummary {
            window,
            accounts: ranked.len(),
            delivered: 0,
            failures: Vec::new(),
        };

        // Accounts are independent; deliveries fan out concurrently and each
        // failure is caught on its own without cancelling sibling sends.
        let outcomes = future::join_all(ranked.iter().map(|(account, entries)| async move {
            (account, self.deliver(account, entries, window).await)
        }))
        .await;

        for (account, outcome) in outcomes {
            match outcome {
                Ok(()) => summary.delivered += 1,
                Err(e) => {
                    warn!("Failed to deliver report for account {}: {}", account, e);
                    summary.failures.push((account.clone(), e.to_string()));
                }
            }
        }

        info!(
            "Run complete: {} of {} reports delivered",
            summary.delivered, summary.accounts
        );
        Ok(summary)
    }

    /// Resolve, build, and send one account's report
    async fn deliver(
        &self,
        account: &AccountId,
        entries: &[RankedEntry],
        window: ReportWindow,
    ) -> Result<()> {
        let entry = self.directory.lookup(account).await?;
        let account_name = resolve_name(entry);
        let report = ReportBuilder::build(account, &account_name, entries, window);
        self.notifier.send(&report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            billing_url: "https://billing.example/costs".to_string(),
            directory_url: "https://directory.example/accounts".to_string(),
            webhook_url: "https://chat.example/hook".to_string(),
            top_n: 10,
            timezone: TimezoneConfig::from_cli(None, true).unwrap(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[test]
    fn test_config_validate_ok() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_top_n() {
        let mut cfg = config();
        cfg.top_n = 0;
        assert!(matches!(cfg.validate(), Err(CostwatchError::Config(_))));
    }

    #[test]
    fn test_config_rejects_empty_url() {
        let mut cfg = config();
        cfg.webhook_url.clear();
        assert!(matches!(cfg.validate(), Err(CostwatchError::Config(_))));
    }
}
