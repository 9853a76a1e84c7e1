pub mod bip44;
pub mod config;
pub mod errors;
pub mod key_deriver;
pub mod report;

pub use config::DeriverConfig;
pub use errors::DeriveError;
pub use key_deriver::{derive_account_keys, DerivedAccount, KeyDeriver};
