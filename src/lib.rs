// src/lib.rs
//! Deterministic Solana account keys from a BIP39 mnemonic.
//!
//! mnemonic → BIP39 seed → SLIP-10 Ed25519 node at `m/44'/501'/i'/0'`
//! → Ed25519 keypair → base58 public key.

pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;
pub mod security;

pub use crate::core::{derive_account_keys, DeriveError, DeriverConfig, KeyDeriver};
pub use crate::crypto::{EncodedPublicKey, MnemonicValidation};
