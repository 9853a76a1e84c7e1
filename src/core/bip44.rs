//! BIP44 paths and SLIP-10 Ed25519 key derivation
//!
//! Solana accounts live at `m/44'/501'/account'/0'`. Ed25519 under SLIP-10
//! only defines hardened children, so every segment carries the hardened
//! offset and a non-hardened index is rejected.

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::core::errors::DeriveError;
use crate::security::redaction::redact_hex_bytes;

type HmacSha512 = Hmac<Sha512>;

/// Offset added to an index to mark it as hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP44 purpose field.
pub const PURPOSE: u32 = 44;

/// SLIP-44 registered coin type for Solana.
pub const SOLANA_COIN_TYPE: u32 = 501;

/// HMAC key for the SLIP-10 Ed25519 master node.
const ED25519_CURVE_KEY: &[u8] = b"ed25519 seed";

/// A fully hardened derivation path, stored as raw child indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    indices: Vec<u32>,
}

impl DerivationPath {
    /// Build a path from unhardened segment values, hardening each one.
    pub fn from_hardened_segments(segments: &[u32]) -> Result<Self, DeriveError> {
        let indices = segments
            .iter()
            .map(|&segment| harden(segment))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { indices })
    }

    /// Raw child indices, hardened offset included.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn depth(&self) -> usize {
        self.indices.len()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{}'", index - HARDENED_OFFSET)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = DeriveError;

    /// Parse `m/44'/501'/0'/0'`. Hardened markers may be `'`, `h` or `H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('/');
        match parts.next() {
            Some("m") | Some("M") => {}
            _ => {
                return Err(DeriveError::DerivationError(format!(
                    "path must start with 'm': {}",
                    s
                )))
            }
        }

        let mut indices = Vec::new();
        for part in parts {
            let digits = part
                .strip_suffix('\'')
                .or_else(|| part.strip_suffix('h'))
                .or_else(|| part.strip_suffix('H'))
                .ok_or_else(|| {
                    DeriveError::DerivationError(format!(
                        "segment '{}' is not hardened; ed25519 supports hardened derivation only",
                        part
                    ))
                })?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DeriveError::DerivationError(format!(
                    "malformed path segment '{}' in {}",
                    part, s
                )));
            }
            let value: u32 = digits.parse().map_err(|_| {
                DeriveError::DerivationError(format!("path segment '{}' out of range", part))
            })?;
            indices.push(harden(value)?);
        }

        Ok(Self { indices })
    }
}

fn harden(segment: u32) -> Result<u32, DeriveError> {
    if segment >= HARDENED_OFFSET {
        return Err(DeriveError::DerivationError(format!(
            "path segment {} exceeds the hardened range (max {})",
            segment,
            HARDENED_OFFSET - 1
        )));
    }
    Ok(segment | HARDENED_OFFSET)
}

/// Solana account path: m/44'/501'/account'/0'
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolanaPath {
    /// Account index
    pub account: u32,
}

impl SolanaPath {
    pub fn new(account: u32) -> Self {
        Self { account }
    }

    /// Generate the complete hardened derivation path.
    pub fn to_derivation_path(&self) -> Result<DerivationPath, DeriveError> {
        DerivationPath::from_hardened_segments(&[PURPOSE, SOLANA_COIN_TYPE, self.account, 0])
    }
}

impl fmt::Display for SolanaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m/{}'/{}'/{}'/0'", PURPOSE, SOLANA_COIN_TYPE, self.account)
    }
}

/// SLIP-10 Ed25519 extended private key.
#[derive(Clone)]
pub struct Slip10Key {
    chain_code: [u8; 32],
    key: Zeroizing<[u8; 32]>,
}

impl Slip10Key {
    /// Create the master node from a BIP39 seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, DeriveError> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(DeriveError::DerivationError(format!(
                "seed length must be between 16 and 64 bytes, got {}",
                seed.len()
            )));
        }

        // HMAC-SHA512("ed25519 seed", seed)
        Self::from_hmac(ED25519_CURVE_KEY, &[seed])
    }

    /// Derive a hardened child. Non-hardened indices are rejected.
    pub fn derive_child(&self, index: u32) -> Result<Self, DeriveError> {
        if index < HARDENED_OFFSET {
            return Err(DeriveError::DerivationError(format!(
                "non-hardened child index {} is not supported for ed25519",
                index
            )));
        }

        // HMAC-SHA512(chain_code, 0x00 || key || ser32(index))
        Self::from_hmac(&self.chain_code, &[&[0x00u8], &self.key[..], &index.to_be_bytes()])
    }

    /// Walk every segment of `path` starting from this node.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, DeriveError> {
        path.indices()
            .iter()
            .try_fold(self.clone(), |node, &index| node.derive_child(index))
    }

    /// Private key bytes, usable as an Ed25519 secret seed.
    pub fn private_key(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    fn from_hmac(mac_key: &[u8], parts: &[&[u8]]) -> Result<Self, DeriveError> {
        let mut mac = HmacSha512::new_from_slice(mac_key).map_err(|e| {
            DeriveError::DerivationError(format!("HMAC initialization failed: {}", e))
        })?;
        for part in parts {
            mac.update(part);
        }
        let result = mac.finalize().into_bytes();

        // IL is the key, IR the chain code
        let mut key = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&result[..32]);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self { chain_code, key })
    }
}

impl fmt::Debug for Slip10Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slip10Key")
            .field("chain_code", &hex::encode(self.chain_code))
            .field("key", &redact_hex_bytes(&self.key[..]))
            .finish()
    }
}
