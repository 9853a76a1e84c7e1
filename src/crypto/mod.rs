pub mod keypair;
pub mod secure_derivation; // mnemonic → seed

pub use self::keypair::{AccountKeypair, EncodedPublicKey};
pub use self::secure_derivation::{derive_seed, mnemonic_to_seed, MnemonicValidation, Seed};
