//! costwatch - Daily cloud cost snapshot reporter

use clap::Parser;
use costwatch::{
    cli::Cli,
    directory::HttpDirectory,
    error::Result,
    notifier::WebhookNotifier,
    orchestrator::{Config, Orchestrator},
    source::BillingApiSource,
    timezone::TimezoneConfig,
};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --quiet flag should override RUST_LOG.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("costwatch=info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let timezone = TimezoneConfig::from_cli(cli.timezone.as_deref(), cli.utc)?;
    info!("Using timezone: {}", timezone.name());

    let config = Config {
        billing_url: cli.billing_url,
        directory_url: cli.directory_url,
        webhook_url: cli.webhook_url,
        top_n: cli.top_n,
        timezone,
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    config.validate()?;

    let source = BillingApiSource::new(config.billing_url.clone(), config.timeout)?;
    let directory = HttpDirectory::new(config.directory_url.clone(), config.timeout)?;
    let notifier = WebhookNotifier::new(config.webhook_url.clone(), config.timeout)?;

    let orchestrator = Orchestrator::new(source, directory, notifier, config);
    let summary = orchestrator.run(chrono::Utc::now()).await?;

    info!(
        "Window {}: {} accounts, {} reports delivered",
        summary.window, summary.accounts, summary.delivered
    );
    for (account, error) in &summary.failures {
        warn!("Delivery failed for account {}: {}", account, error);
    }

    Ok(())
}
