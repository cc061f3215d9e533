//! costwatch - Daily cloud cost snapshot reporter
//!
//! This library provides functionality to:
//! - Fetch raw cost records from a billing API for a one-day window
//! - Aggregate and rank per-account service spend (top-N, stable ordering)
//! - Render per-account reports with a header and a cost table
//! - Deliver each report to a chat webhook, isolating per-account failures
//!
//! # Examples
//!
//! ```no_run
//! use costwatch::{
//!     notifier::WebhookNotifier,
//!     directory::HttpDirectory,
//!     orchestrator::{Config, Orchestrator, DEFAULT_TIMEOUT},
//!     source::BillingApiSource,
//!     timezone::TimezoneConfig,
//! };
//!
//! # async fn example() -> costwatch::Result<()> {
//! let config = Config {
//!     billing_url: "https://billing.example/costs".into(),
//!     directory_url: "https://directory.example/accounts".into(),
//!     webhook_url: "https://chat.example/hook".into(),
//!     top_n: 10,
//!     timezone: TimezoneConfig::from_cli(None, true)?,
//!     timeout: DEFAULT_TIMEOUT,
//! };
//!
//! let source = BillingApiSource::new(config.billing_url.clone(), config.timeout)?;
//! let directory = HttpDirectory::new(config.directory_url.clone(), config.timeout)?;
//! let notifier = WebhookNotifier::new(config.webhook_url.clone(), config.timeout)?;
//!
//! let orchestrator = Orchestrator::new(source, directory, notifier, config);
//! let summary = orchestrator.run(chrono::Utc::now()).await?;
//! println!("delivered {} reports", summary.delivered);
//! # Ok(())
//! # }
//! ```

pub mod aggregation;
pub mod cli;
pub mod directory;
pub mod error;
pub mod notifier;
pub mod orchestrator;
pub mod report;
pub mod source;
pub mod timezone;
pub mod types;

// Re-export commonly used types
pub use error::{CostwatchError, Result};
pub use types::{AccountId, Category, CostRecord, RankedEntry, ReportWindow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
