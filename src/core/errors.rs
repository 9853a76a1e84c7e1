use thiserror::Error;

/// Error type for mnemonic, derivation and key encoding operations.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// Mnemonic failed wordlist/checksum validation or is empty.
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Malformed path, non-hardened segment or unusable seed.
    #[error("Key derivation error: {0}")]
    DerivationError(String),

    /// Malformed key material or public key text.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Configuration file or environment override could not be applied.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DeriveError {
    /// Errors caused by the supplied mnemonic or configuration rather than by
    /// the derivation pipeline itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, DeriveError::InvalidMnemonic(_) | DeriveError::ConfigError(_))
    }
}

impl From<bip39::Error> for DeriveError {
    fn from(err: bip39::Error) -> Self {
        DeriveError::InvalidMnemonic(err.to_string())
    }
}

impl From<ed25519_dalek::SignatureError> for DeriveError {
    fn from(err: ed25519_dalek::SignatureError) -> Self {
        DeriveError::EncodingError(err.to_string())
    }
}

impl From<bs58::decode::Error> for DeriveError {
    fn from(err: bs58::decode::Error) -> Self {
        DeriveError::EncodingError(format!("invalid base58: {}", err))
    }
}

impl From<toml::de::Error> for DeriveError {
    fn from(err: toml::de::Error) -> Self {
        DeriveError::ConfigError(err.to_string())
    }
}
