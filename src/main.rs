// src/main.rs
//! Prints the hex seed and the base58 public keys of accounts
//! `m/44'/501'/0'/0'` .. `m/44'/501'/{n-1}'/0'`.
use anyhow::{Context, Result};
use clap::Parser;
use sol_hd_keys::cli::Cli;
use sol_hd_keys::core::report::DerivationReport;
use sol_hd_keys::core::DeriverConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    info!("Starting sol-hd-keys v{}", env!("CARGO_PKG_VERSION"));

    let config = DeriverConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let report = DerivationReport::generate(&config)
        .await
        .context("key derivation failed")?;

    let stdout = std::io::stdout();
    report
        .write_to(&mut stdout.lock())
        .context("failed to write derived keys to stdout")?;

    Ok(())
}

fn init_logging() -> Result<()> {
    // stdout carries the keys; logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
