//! Core domain types for costwatch
//!
//! Strong typing for the concepts the pipeline is built around: billing
//! accounts, cost categories, cost records, and the one-day reporting
//! window.

use crate::error::{CostwatchError, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strongly-typed billing account identifier
///
/// # Examples
/// ```
/// use costwatch::types::AccountId;
///
/// let account = AccountId::new("123456789012");
/// assert_eq!(account.as_str(), "123456789012");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new AccountId from any string-like type
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly-typed cost category label (typically a cloud service name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a new Category
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw cost line as returned by the billing API
///
/// Amounts arrive as strings on the wire and are validated when converted
/// into a [`CostRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCostLine {
    /// Account the cost is attributed to
    pub account: String,
    /// Service the cost was incurred on
    pub service: String,
    /// Monetary amount, decimal string
    pub amount: String,
}

/// A single validated cost record
///
/// Amounts keep full precision here; rounding to cents happens only when a
/// summed total is finalized, so intermediate values never accumulate
/// rounding error.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRecord {
    /// Account the cost is attributed to
    pub account: AccountId,
    /// Cost category within the account
    pub category: Category,
    /// Monetary amount; negative values are credits/refunds
    pub amount: f64,
}

impl CostRecord {
    /// Validate and convert a raw billing line
    ///
    /// A malformed line fails the whole batch: a partially-aggregated total
    /// is worse than a hard failure.
    pub fn from_raw(raw: RawCostLine) -> Result<Self> {
        if raw.account.is_empty() {
            return Err(CostwatchError::InvalidRecord(
                "missing account identifier".to_string(),
            ));
        }
        if raw.service.is_empty() {
            return Err(CostwatchError::InvalidRecord(format!(
                "missing service label for account {}",
                raw.account
            )));
        }
        let amount: f64 = raw.amount.trim().parse().map_err(|_| {
            CostwatchError::InvalidRecord(format!(
                "non-numeric amount {:?} for account {}",
                raw.amount, raw.account
            ))
        })?;
        if !amount.is_finite() {
            return Err(CostwatchError::InvalidRecord(format!(
                "non-finite amount for account {}",
                raw.account
            )));
        }
        Ok(Self {
            account: AccountId::new(raw.account),
            category: Category::new(raw.service),
            amount,
        })
    }
}

/// A summed, ranked cost entry within one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Cost category
    pub category: Category,
    /// Total amount for the category, rounded to cents
    pub amount: f64,
}

/// Half-open calendar-day range `[start, end)` covered by one report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First day covered (inclusive)
    pub start: NaiveDate,
    /// Day after the last day covered (exclusive)
    pub end: NaiveDate,
}

impl ReportWindow {
    /// Create a window from explicit bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The one-day window two days in arrears of `now`, in the given zone
    ///
    /// Billing data for a day settles upstream with a delay, so the report
    /// always covers the whole calendar day before yesterday:
    /// `[today - 2d, today - 1d)`.
    pub fn two_days_in_arrears(now: DateTime<Utc>, tz: Tz) -> Self {
        let today = now.with_timezone(&tz).date_naive();
        Self {
            start: today - Duration::days(2),
            end: today - Duration::days(1),
        }
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Round a monetary amount to cents, half away from zero
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Exact cent value of an already-rounded amount, for ordering
pub(crate) fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
