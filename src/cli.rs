use clap::Parser;
use std::path::PathBuf;

/// Print the BIP39 seed and Solana account public keys for the configured mnemonic.
#[derive(Debug, Parser)]
#[command(name = "sol-hd-keys", version, about)]
pub struct Cli {
    /// Optional TOML config file (mnemonic, passphrase, account_count, validation, print_seed)
    #[arg(long, env = "SOL_HD_KEYS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
