use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// send-token CLI (library-facing definitions)
#[derive(Debug, Parser)]
#[command(name = "send_token", about = "Drive a send-token form offline", version)]
pub struct Cli {
    /// TOML config file (falls back to SEND_TOKEN_CONFIG, then defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in a draft, confirm it against the dry-run executor and print the result
    Send {
        /// Address available as a source; repeat for several
        #[arg(long = "address", required = true)]
        addresses: Vec<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        amount: Option<rust_decimal::Decimal>,
        /// Gas price; numbers are kept as numbers, anything else as text
        #[arg(long = "gas-price")]
        gas_price: Option<String>,
    },
    /// Print the effective configuration as TOML
    Config,
}
