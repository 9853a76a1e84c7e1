//! Mnemonic → seed conversion
//!
//! BIP39 seed: PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" || passphrase`,
//! both inputs NFKD-normalized.
use std::borrow::Cow;
use std::fmt;

use bip39::Mnemonic;
use serde::Deserialize;
use sha2::Sha512;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::errors::DeriveError;
use crate::security::redaction::{redact_hex_bytes, redact_phrase};

/// BIP39 PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes.
pub const SEED_LEN: usize = 64;

/// How strictly a mnemonic is checked before deriving the seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MnemonicValidation {
    /// English wordlist membership and checksum are enforced.
    #[default]
    Strict,
    /// The phrase is fed to PBKDF2 as-is (after NFKD), valid or not.
    Lenient,
}

impl std::str::FromStr for MnemonicValidation {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(DeriveError::ConfigError(format!(
                "unknown mnemonic validation mode '{}' (expected strict or lenient)",
                other
            ))),
        }
    }
}

/// 64-byte BIP39 seed, zeroized on drop.
#[derive(Clone)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0[..])
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", redact_hex_bytes(&self.0[..]))
    }
}

/// Parse and validate a mnemonic against the English wordlist and checksum.
pub fn validate_mnemonic(phrase: &str) -> Result<Mnemonic, DeriveError> {
    if phrase.trim().is_empty() {
        return Err(DeriveError::InvalidMnemonic("mnemonic is empty".to_string()));
    }
    Ok(Mnemonic::parse(phrase)?)
}

/// Derive the BIP39 seed for `phrase` and `passphrase`.
pub fn mnemonic_to_seed(
    phrase: &str,
    passphrase: &str,
    validation: MnemonicValidation,
) -> Result<Seed, DeriveError> {
    debug!(mnemonic = %redact_phrase(phrase), ?validation, "deriving seed");

    match validation {
        MnemonicValidation::Strict => {
            let mnemonic = validate_mnemonic(phrase)?;
            Ok(Seed(Zeroizing::new(mnemonic.to_seed(passphrase))))
        }
        MnemonicValidation::Lenient => {
            if phrase.trim().is_empty() {
                return Err(DeriveError::InvalidMnemonic("mnemonic is empty".to_string()));
            }
            if let Err(e) = Mnemonic::parse(phrase) {
                warn!(
                    mnemonic = %redact_phrase(phrase),
                    reason = %e,
                    "mnemonic is not valid BIP39; deriving seed from the raw phrase"
                );
            }
            Ok(raw_phrase_seed(phrase, passphrase))
        }
    }
}

/// Run [`mnemonic_to_seed`] on the blocking pool and await it.
pub async fn derive_seed(
    phrase: String,
    passphrase: String,
    validation: MnemonicValidation,
) -> Result<Seed, DeriveError> {
    let phrase = Zeroizing::new(phrase);
    let passphrase = Zeroizing::new(passphrase);
    tokio::task::spawn_blocking(move || mnemonic_to_seed(&phrase, &passphrase, validation))
        .await
        .map_err(|e| DeriveError::DerivationError(format!("seed task failed: {}", e)))?
}

fn raw_phrase_seed(phrase: &str, passphrase: &str) -> Seed {
    let mut password = Cow::Borrowed(phrase);
    Mnemonic::normalize_utf8_cow(&mut password);
    let mut salt: Cow<'_, str> = Cow::Owned(format!("mnemonic{}", passphrase));
    Mnemonic::normalize_utf8_cow(&mut salt);

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed[..]);
    Seed(seed)
}
