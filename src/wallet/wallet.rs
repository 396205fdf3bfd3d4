use crate::address::AddressCodec;
use crate::error::{Result, WalletError};
use ring::rand::SystemRandom;
use ring::signature::{EcdsaKeyPair, KeyPair, ECDSA_P256_SHA256_FIXED_SIGNING};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Byte length of the P-256 field modulus
pub const FIELD_LEN: usize = 32;
/// Serialized public key length: X and Y coordinates, nothing else
pub const PUBLIC_KEY_LEN: usize = 2 * FIELD_LEN;

/// An ECDSA P-256 key pair.
///
/// The private key lives in its PKCS#8 document; the public key is kept as
/// the raw concatenation of the X and Y coordinates, each exactly
/// [`FIELD_LEN`] bytes big-endian with leading zeros preserved. A key whose
/// coordinate happens to start with a zero byte serializes to the same
/// length as any other, so addresses stay deterministic across equivalent
/// keys. Key material is wiped from memory on drop.
#[derive(Clone, Serialize, Deserialize, bincode::Encode, bincode::Decode, Zeroize, ZeroizeOnDrop)]
pub struct Wallet {
    pkcs8: Vec<u8>,
    public_key: Vec<u8>,
}

impl Wallet {
    /// Generate a fresh key pair from the platform CSPRNG.
    pub fn new() -> Result<Wallet> {
        let pkcs8 = crate::utils::new_key_pair()?;
        let public_key = derive_public_key(pkcs8.as_slice())?;
        Ok(Wallet { pkcs8, public_key })
    }

    /// Derive this wallet's address for the given network codec.
    pub fn get_address(&self, codec: &AddressCodec) -> String {
        codec.encode(self.public_key.as_slice())
    }

    pub fn get_public_key(&self) -> &[u8] {
        self.public_key.as_slice()
    }

    pub fn get_pkcs8(&self) -> &[u8] {
        self.pkcs8.as_slice()
    }

    /// Check that the stored public key matches the one re-derived from the
    /// PKCS#8 document. Used after loading a wallet from disk, where the
    /// stored bytes are untrusted.
    pub fn verify_public_key(&self) -> Result<()> {
        let derived = derive_public_key(self.pkcs8.as_slice())?;
        if derived != self.public_key {
            return Err(WalletError::Crypto(
                "Stored public key does not match its private key".to_string(),
            ));
        }
        Ok(())
    }
}

/// Recompute the 64-byte X || Y public key from a PKCS#8 private key.
///
/// ring serializes the public point uncompressed: a 0x04 tag byte followed
/// by both coordinates at full field width. Stripping the tag gives exactly
/// the representation we persist and hash.
fn derive_public_key(pkcs8: &[u8]) -> Result<Vec<u8>> {
    let rng = SystemRandom::new();
    let key_pair = EcdsaKeyPair::from_pkcs8(&ECDSA_P256_SHA256_FIXED_SIGNING, pkcs8, &rng)
        .map_err(|e| WalletError::Crypto(format!("Failed to create key pair from PKCS8: {e}")))?;
    let point = key_pair.public_key().as_ref();
    if point.len() != PUBLIC_KEY_LEN + 1 || point[0] != 0x04 {
        return Err(WalletError::Crypto(format!(
            "Unexpected public point encoding ({} bytes)",
            point.len()
        )));
    }
    Ok(point[1..].to_vec())
}
