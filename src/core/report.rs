//! Seed + account output, in the order the tool prints it.

use std::io::{self, Write};

use tracing::info;

use crate::core::config::DeriverConfig;
use crate::core::errors::DeriveError;
use crate::core::key_deriver::{DerivedAccount, KeyDeriver};
use crate::crypto::secure_derivation::{derive_seed, Seed};

/// Everything one run produces.
#[derive(Debug)]
pub struct DerivationReport {
    pub seed: Seed,
    pub accounts: Vec<DerivedAccount>,
    print_seed: bool,
}

impl DerivationReport {
    /// Derive the seed (awaited once, off the async runtime) and then every
    /// configured account.
    pub async fn generate(config: &DeriverConfig) -> Result<Self, DeriveError> {
        let seed = derive_seed(
            config.mnemonic.clone(),
            config.passphrase.clone(),
            config.validation,
        )
        .await?;

        let deriver = KeyDeriver::from_seed(&seed)?;
        let accounts = deriver.derive_accounts(config.account_count)?;
        for account in &accounts {
            info!(index = account.index, path = %account.path, public_key = %account.public_key(), "account");
        }

        Ok(Self {
            seed,
            accounts,
            print_seed: config.print_seed,
        })
    }

    /// Seed hex line (when enabled), then one base58 key per line by index.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.print_seed {
            writeln!(out, "{}", self.seed.to_hex())?;
        }
        for account in &self.accounts {
            writeln!(out, "{}", account.public_key())?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::secure_derivation::MnemonicValidation;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn config(account_count: u32, print_seed: bool) -> DeriverConfig {
        DeriverConfig {
            mnemonic: TEST_MNEMONIC.to_string(),
            passphrase: String::new(),
            account_count,
            validation: MnemonicValidation::Strict,
            print_seed,
        }
    }

    #[tokio::test]
    async fn test_report_lines() {
        let report = DerivationReport::generate(&config(2, true)).await.unwrap();
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 128);
        assert_eq!(lines[1], "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert_eq!(lines[2], "Hh8QwFUA6MtVu1qAoq12ucvFHNwCcVTV7hpWjeY1Hztb");
    }

    #[tokio::test]
    async fn test_report_without_seed_line() {
        let report = DerivationReport::generate(&config(1, false)).await.unwrap();
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk\n");
    }

    #[tokio::test]
    async fn test_report_propagates_invalid_mnemonic() {
        let mut cfg = config(1, true);
        cfg.mnemonic = "not a mnemonic".to_string();
        let err = DerivationReport::generate(&cfg).await.unwrap_err();
        assert!(matches!(err, DeriveError::InvalidMnemonic(_)));
    }
}
