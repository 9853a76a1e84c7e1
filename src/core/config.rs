use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::config::env_config::EnvOverrides;
use crate::core::errors::DeriveError;
use crate::crypto::secure_derivation::MnemonicValidation;
use crate::security::redaction::redact_phrase;

/// Reference phrase the tool runs against when nothing else is configured.
///
/// `cardle` is not in the BIP39 English wordlist, so this phrase only
/// derives under [`MnemonicValidation::Lenient`].
pub const REFERENCE_MNEMONIC: &str =
    "proud cardle silly alpha swift swim speak suspect boring pink flash hotel";

/// Number of accounts derived by default.
pub const DEFAULT_ACCOUNT_COUNT: u32 = 4;

/// Key derivation configuration
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeriverConfig {
    #[serde(default = "DeriverConfig::default_mnemonic")]
    pub mnemonic: String,

    /// BIP39 passphrase (the "25th word")
    #[serde(default)]
    pub passphrase: String,

    #[serde(default = "DeriverConfig::default_account_count")]
    pub account_count: u32,

    #[serde(default = "DeriverConfig::default_validation")]
    pub validation: MnemonicValidation,

    /// Print the hex seed before the public keys
    #[serde(default = "DeriverConfig::default_print_seed")]
    pub print_seed: bool,
}

impl DeriverConfig {
    fn default_mnemonic() -> String { REFERENCE_MNEMONIC.to_string() }
    fn default_account_count() -> u32 { DEFAULT_ACCOUNT_COUNT }
    fn default_validation() -> MnemonicValidation { MnemonicValidation::Lenient }
    fn default_print_seed() -> bool { true }

    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, DeriveError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DeriveError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DeriveError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Defaults, then the optional TOML file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, DeriveError> {
        let mut config = match path {
            Some(path) => {
                info!(path = %path.display(), "loading config file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        EnvOverrides::from_env()?.apply(&mut config);
        info!(config = ?config, "configuration loaded");
        Ok(config)
    }
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            mnemonic: Self::default_mnemonic(),
            passphrase: String::new(),
            account_count: Self::default_account_count(),
            validation: Self::default_validation(),
            print_seed: Self::default_print_seed(),
        }
    }
}

impl fmt::Debug for DeriverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeriverConfig")
            .field("mnemonic", &redact_phrase(&self.mnemonic))
            .field("passphrase", &if self.passphrase.is_empty() { "<empty>" } else { "<redacted>" })
            .field("account_count", &self.account_count)
            .field("validation", &self.validation)
            .field("print_seed", &self.print_seed)
            .finish()
    }
}
