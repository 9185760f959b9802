// src/main.rs
//! send_token entry point: runs one send form against the dry-run executor.
use anyhow::{Context, Result};
use clap::Parser;
use send_token::blockchain::DryRunExecutor;
use send_token::cli::{Cli, Commands};
use send_token::core::config::{LoggingConfig, SendTokenConfig};
use send_token::{Address, AddressList, GasPrice, SendIntent, SendTokenSession};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SendTokenConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config.logging)?;

    info!("Starting send_token v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
        Commands::Send { addresses, from, to, amount, gas_price } => {
            let executor = Arc::new(DryRunExecutor::with_latency(config.submission.dry_run_latency()));
            let mut session =
                SendTokenSession::from_config(&config, AddressList::from(addresses), executor);

            let mut intents = Vec::new();
            if let Some(from) = from {
                intents.push(SendIntent::ChangeFrom(Address::from(from)));
            }
            if let Some(amount) = amount {
                intents.push(SendIntent::ChangeAmount(amount));
            }
            if let Some(to) = to {
                intents.push(SendIntent::ChangeTo(to));
            }
            if let Some(raw) = gas_price {
                intents.push(SendIntent::ChangeGasPrice(parse_gas_price(&raw)));
            }
            intents.push(SendIntent::ConfirmSendTransaction);

            for intent in intents {
                let name = intent.name();
                if !session.handle(intent) {
                    tracing::warn!(intent = name, "intent had no effect");
                }
            }
            session.next_result().await;

            let view = session.form().view();
            println!("{}", serde_json::to_string_pretty(&view)?);
            if let Some(error) = view.confirmation_error {
                anyhow::bail!("submission failed: {}", error);
            }
        }
    }

    Ok(())
}

/// Numbers stay numbers, anything else is passed through as text.
fn parse_gas_price(raw: &str) -> GasPrice {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value @ serde_json::Value::Number(_)) => GasPrice::new(value),
        _ => GasPrice::from(raw),
    }
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .context("invalid logging filter")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
