//! Secret-handling helpers
//!
//! Mnemonics, seeds and private keys must never reach logs in plaintext.

pub mod redaction;
pub use redaction::{redact_hex_bytes, redact_phrase};
