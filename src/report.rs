//! Report rendering for ranked per-account cost data
//!
//! Converts a ranked entry list plus window bounds and account identity into
//! a channel-ready payload: a one-line header and a tabular body. Rendering
//! is a pure transformation and byte-identical for identical input.

use crate::types::{AccountId, RankedEntry, ReportWindow};
use prettytable::{format, row, Table};
use serde::{Deserialize, Serialize};

/// Channel-ready report payload for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Account the report covers
    pub account: AccountId,
    /// Resolved display name (may be a directory sentinel)
    pub account_name: String,
    /// Window the costs were aggregated over
    pub window: ReportWindow,
    /// Human-readable header line
    pub header: String,
    /// Tabular body
    pub body: String,
}

impl Report {
    /// Full message text as delivered to the notification channel
    pub fn text(&self) -> String {
        format!("{}\n{}", self.header, self.body)
    }
}

/// Builds [`Report`] payloads from aggregated data
pub struct ReportBuilder;

impl ReportBuilder {
    /// Render one account's ranked entries into a report payload
    ///
    /// An empty entry list still produces a valid payload; the body says so
    /// instead of showing an empty table.
    pub fn build(
        account: &AccountId,
        account_name: &str,
        entries: &[RankedEntry],
        window: ReportWindow,
    ) -> Report {
        let header = format!("Cost report {window} | account {account} ({account_name})");

        let body = if entries.is_empty() {
            "No cost activity recorded for this window.".to_string()
        } else {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
            table.set_titles(row![b -> "Service", b -> "Cost"]);
            for entry in entries {
                table.add_row(row![
                    entry.category.as_str(),
                    r -> Self::format_currency(entry.amount)
                ]);
            }
            table.to_string()
        };

        Report {
            account: account.clone(),
            account_name: account_name.to_string(),
            window,
            header,
            body,
        }
    }

    /// Format currency with a dollar sign and fixed two decimals
    fn format_currency(amount: f64) -> String {
        format!("${amount:.2}")
    }
}
