//! relay-send — send a single error report through Mailgun.
//!
//! Loads a JSON config (domain/to/from/api_key) and posts one message.
//! Useful for smoke-testing a Mailgun domain from the command line.

use anyhow::Context;
use clap::Parser;

use relay::{Config, Relay};

/// Send one error report through Mailgun.
#[derive(Parser, Debug)]
#[command(name = "relay-send", version, about)]
struct Cli {
    /// Path to the JSON config file.
    #[arg(long, env = "RELAY_CONFIG", default_value = "config.json")]
    config: String,

    /// Subject line for the report.
    #[arg(long)]
    subject: String,

    /// Error message to report.
    #[arg(long)]
    message: String,

    /// Override the Mailgun API base (e.g. the EU endpoint).
    #[arg(long, env = "RELAY_API_BASE")]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config))?;

    let mut relay = Relay::new(config)?;
    if let Some(base) = cli.api_base {
        relay = relay.with_base_url(base);
    }

    relay
        .send(&cli.subject, &cli.message)
        .await
        .context("sending report")?;

    tracing::info!(subject = %cli.subject, "report sent");
    Ok(())
}
