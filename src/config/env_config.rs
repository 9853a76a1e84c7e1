use std::env;

use crate::core::config::DeriverConfig;
use crate::core::errors::DeriveError;
use crate::crypto::secure_derivation::MnemonicValidation;

pub const ENV_MNEMONIC: &str = "SOL_HD_KEYS_MNEMONIC";
pub const ENV_PASSPHRASE: &str = "SOL_HD_KEYS_PASSPHRASE";
pub const ENV_ACCOUNT_COUNT: &str = "SOL_HD_KEYS_ACCOUNT_COUNT";
pub const ENV_VALIDATION: &str = "SOL_HD_KEYS_VALIDATION";

/// Values taken from the process environment, layered over the config file.
#[derive(Default)]
pub struct EnvOverrides {
    /// Mnemonic phrase (SOL_HD_KEYS_MNEMONIC)
    pub mnemonic: Option<String>,
    /// BIP39 passphrase (SOL_HD_KEYS_PASSPHRASE)
    pub passphrase: Option<String>,
    pub account_count: Option<u32>,
    pub validation: Option<MnemonicValidation>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self, DeriveError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build overrides from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DeriveError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let account_count = get(ENV_ACCOUNT_COUNT)
            .map(|raw| {
                raw.trim().parse::<u32>().map_err(|e| {
                    DeriveError::ConfigError(format!("{} must be a non-negative integer: {}", ENV_ACCOUNT_COUNT, e))
                })
            })
            .transpose()?;
        let validation = get(ENV_VALIDATION)
            .map(|raw| raw.parse::<MnemonicValidation>())
            .transpose()?;

        Ok(Self {
            mnemonic: get(ENV_MNEMONIC),
            // an explicitly empty passphrase is still a passphrase
            passphrase: lookup(ENV_PASSPHRASE),
            account_count,
            validation,
        })
    }

    pub fn apply(self, config: &mut DeriverConfig) {
        if let Some(mnemonic) = self.mnemonic {
            config.mnemonic = mnemonic;
        }
        if let Some(passphrase) = self.passphrase {
            config.passphrase = passphrase;
        }
        if let Some(account_count) = self.account_count {
            config.account_count = account_count;
        }
        if let Some(validation) = self.validation {
            config.validation = validation;
        }
    }
}
