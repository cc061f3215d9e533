//! Command-line interface definitions

use clap::Parser;

/// Daily cloud cost snapshot reporter
///
/// Fetches billing records for the calendar day two days in arrears,
/// ranks per-account service spend, and delivers one report per account
/// to a chat webhook.
#[derive(Debug, Parser)]
#[command(name = "costwatch", version, about)]
pub struct Cli {
    /// Billing API endpoint returning cost records for a window
    #[arg(long, env = "COSTWATCH_BILLING_URL")]
    pub billing_url: String,

    /// Account directory endpoint for display name lookups
    #[arg(long, env = "COSTWATCH_DIRECTORY_URL")]
    pub directory_url: String,

    /// Chat webhook endpoint reports are delivered to
    #[arg(long, env = "COSTWATCH_WEBHOOK_URL")]
    pub webhook_url: String,

    /// Maximum ranked categories per account report
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Reference timezone for the reporting window (e.g. 'Asia/Tokyo')
    #[arg(long)]
    pub timezone: Option<String>,

    /// Use UTC for the reporting window
    #[arg(long)]
    pub utc: bool,

    /// Request timeout in seconds for billing fetch and delivery
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Suppress informational logging
    #[arg(short, long)]
    pub quiet: bool,
}
