//! Solana account key derivation
//!
//! seed → SLIP-10 node at `m/44'/501'/i'/0'` → Ed25519 keypair → base58.
//!
//! ## Security
//! - Derived key material lives only inside `Slip10Key`/`AccountKeypair`
//!   and is zeroized when they drop
//! - Only public keys are logged

use tracing::{debug, info};

use crate::core::bip44::{DerivationPath, SolanaPath, Slip10Key};
use crate::core::errors::DeriveError;
use crate::crypto::keypair::{AccountKeypair, EncodedPublicKey};
use crate::crypto::secure_derivation::{mnemonic_to_seed, MnemonicValidation, Seed};

/// One derived account.
#[derive(Debug)]
pub struct DerivedAccount {
    pub index: u32,
    pub path: DerivationPath,
    pub keypair: AccountKeypair,
}

impl DerivedAccount {
    pub fn public_key(&self) -> EncodedPublicKey {
        self.keypair.encoded_public_key()
    }
}

/// Derives Solana accounts from a single master node.
#[derive(Debug, Clone)]
pub struct KeyDeriver {
    master: Slip10Key,
}

impl KeyDeriver {
    pub fn from_seed(seed: &Seed) -> Result<Self, DeriveError> {
        Ok(Self {
            master: Slip10Key::from_seed(seed.as_bytes())?,
        })
    }

    pub fn from_mnemonic(
        phrase: &str,
        passphrase: &str,
        validation: MnemonicValidation,
    ) -> Result<Self, DeriveError> {
        let seed = mnemonic_to_seed(phrase, passphrase, validation)?;
        Self::from_seed(&seed)
    }

    /// Keypair at an arbitrary hardened path.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<AccountKeypair, DeriveError> {
        let node = self.master.derive_path(path)?;
        Ok(AccountKeypair::from_seed(node.private_key()))
    }

    /// Account `index` at `m/44'/501'/index'/0'`.
    pub fn derive_account(&self, index: u32) -> Result<DerivedAccount, DeriveError> {
        let path = SolanaPath::new(index).to_derivation_path()?;
        debug!(index, path = %path, "deriving account");

        let keypair = self.derive_path(&path)?;
        Ok(DerivedAccount { index, path, keypair })
    }

    /// Accounts `0..count` in ascending index order.
    pub fn derive_accounts(&self, count: u32) -> Result<Vec<DerivedAccount>, DeriveError> {
        let accounts = (0..count)
            .map(|index| self.derive_account(index))
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = accounts.len(), "derived accounts");
        Ok(accounts)
    }
}

/// Base58 public keys for accounts `0..account_count` of a BIP39 mnemonic.
///
/// The mnemonic is validated strictly (English wordlist and checksum) and no
/// passphrase is used.
///
/// # Example
/// ```
/// let keys = sol_hd_keys::derive_account_keys(
///     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
///     1,
/// )?;
/// assert_eq!(keys[0].as_str(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
/// # Ok::<(), sol_hd_keys::DeriveError>(())
/// ```
pub fn derive_account_keys(
    mnemonic: &str,
    account_count: u32,
) -> Result<Vec<EncodedPublicKey>, DeriveError> {
    let deriver = KeyDeriver::from_mnemonic(mnemonic, "", MnemonicValidation::Strict)?;
    Ok(deriver
        .derive_accounts(account_count)?
        .iter()
        .map(DerivedAccount::public_key)
        .collect())
}
