//! Ed25519 account keypairs and base58 public key encoding

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use zeroize::Zeroizing;

use crate::core::errors::DeriveError;

/// Signing keypair built from 32 bytes of derived key material.
pub struct AccountKeypair {
    signing_key: SigningKey,
}

impl AccountKeypair {
    /// Expand a 32-byte secret seed into a full keypair.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Same as [`AccountKeypair::from_seed`] for callers holding a slice.
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self, DeriveError> {
        let seed: &[u8; SECRET_KEY_LENGTH] = seed.try_into().map_err(|_| {
            DeriveError::EncodingError(format!(
                "ed25519 secret seed must be {} bytes, got {}",
                SECRET_KEY_LENGTH,
                seed.len()
            ))
        })?;
        Ok(Self::from_seed(seed))
    }

    /// Load a 64-byte `secret || public` keypair, rejecting a mismatched public half.
    pub fn from_keypair_bytes(bytes: &[u8]) -> Result<Self, DeriveError> {
        let bytes: &[u8; KEYPAIR_LENGTH] = bytes.try_into().map_err(|_| {
            DeriveError::EncodingError(format!(
                "keypair must be {} bytes, got {}",
                KEYPAIR_LENGTH,
                bytes.len()
            ))
        })?;
        let signing_key = SigningKey::from_keypair_bytes(bytes)?;
        Ok(Self { signing_key })
    }

    /// 64-byte `secret || public` layout used by Solana keypair files.
    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; KEYPAIR_LENGTH]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    pub fn encoded_public_key(&self) -> EncodedPublicKey {
        EncodedPublicKey::from_bytes(&self.public_key_bytes())
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl fmt::Debug for AccountKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountKeypair")
            .field("public_key", &self.encoded_public_key())
            .finish_non_exhaustive()
    }
}

/// Base58 text form of a 32-byte Ed25519 public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedPublicKey(String);

impl EncodedPublicKey {
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bs58::encode(bytes).into_string())
    }

    /// Decode back to the raw public key.
    pub fn decode(&self) -> Result<[u8; PUBLIC_KEY_LENGTH], DeriveError> {
        decode_public_key(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EncodedPublicKey {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_public_key(s)?;
        Ok(Self(s.to_string()))
    }
}

fn decode_public_key(s: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], DeriveError> {
    let bytes = bs58::decode(s).into_vec()?;
    bytes.as_slice().try_into().map_err(|_| {
        DeriveError::EncodingError(format!(
            "public key must decode to {} bytes, got {}",
            PUBLIC_KEY_LENGTH,
            bytes.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, Verifier};

    #[test]
    fn test_keypair_deterministic() {
        let a = AccountKeypair::from_seed(&[0x55; 32]);
        let b = AccountKeypair::from_seed(&[0x55; 32]);
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
        assert_eq!(a.encoded_public_key(), b.encoded_public_key());
    }

    #[test]
    fn test_slip10_vector_public_key() {
        let seed = hex::decode("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7").unwrap();
        let keypair = AccountKeypair::from_seed_slice(&seed).unwrap();
        assert_eq!(
            hex::encode(keypair.public_key_bytes()),
            "a4b2856bfec510abab89753fac1ac0e1112364e7d250545963f135f2a33188ed"
        );
    }

    #[test]
    fn test_seed_slice_wrong_length() {
        let err = AccountKeypair::from_seed_slice(&[1u8; 31]).unwrap_err();
        assert!(matches!(err, DeriveError::EncodingError(_)));
    }

    #[test]
    fn test_keypair_bytes_layout() {
        let keypair = AccountKeypair::from_seed(&[9u8; 32]);
        let bytes = keypair.to_keypair_bytes();
        assert_eq!(&bytes[..32], &[9u8; 32]);
        assert_eq!(&bytes[32..], &keypair.public_key_bytes());

        let restored = AccountKeypair::from_keypair_bytes(&bytes[..]).unwrap();
        assert_eq!(restored.public_key_bytes(), keypair.public_key_bytes());
    }

    #[test]
    fn test_keypair_bytes_mismatched_public_half() {
        let keypair = AccountKeypair::from_seed(&[9u8; 32]);
        let mut bytes = *keypair.to_keypair_bytes();
        bytes[63] ^= 0xff;
        let err = AccountKeypair::from_keypair_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DeriveError::EncodingError(_)));
    }

    #[test]
    fn test_keypair_bytes_wrong_length() {
        assert!(AccountKeypair::from_keypair_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_signature_verifies_with_derived_public_key() {
        let keypair = AccountKeypair::from_seed(&[3u8; 32]);
        let msg = b"fixed message for ed25519";
        let sig = keypair.signing_key().sign(msg);
        assert!(keypair.verifying_key().verify(msg, &sig).is_ok());
    }

    #[test]
    fn test_encoded_public_key_roundtrip() {
        let keypair = AccountKeypair::from_seed(&[4u8; 32]);
        let encoded = keypair.encoded_public_key();
        assert_eq!(encoded.decode().unwrap(), keypair.public_key_bytes());

        let parsed: EncodedPublicKey = encoded.as_str().parse().unwrap();
        assert_eq!(parsed, encoded);
    }

    #[test]
    fn test_encoded_public_key_rejects_short_and_invalid() {
        // 1 decodes to a single zero byte
        assert!(matches!("1".parse::<EncodedPublicKey>(), Err(DeriveError::EncodingError(_))));
        assert!(matches!("0OIl".parse::<EncodedPublicKey>(), Err(DeriveError::EncodingError(_))));
    }

    #[test]
    fn test_debug_hides_secret() {
        let keypair = AccountKeypair::from_seed(&[5u8; 32]);
        let rendered = format!("{:?}", keypair);
        assert!(rendered.contains(keypair.encoded_public_key().as_str()));
        assert!(!rendered.contains(&hex::encode([5u8; 32])));
    }
}
