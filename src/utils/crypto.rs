use ring::digest::{Context, SHA256};
use ring::rand::SystemRandom;
use ring::signature::{EcdsaKeyPair, ECDSA_P256_SHA256_FIXED_SIGNING};

use crate::error::{Result, WalletError};

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| WalletError::InvalidEncoding(format!("Invalid base58 encoding: {e}")))
}

/// Generate a fresh P-256 key pair as a PKCS#8 document.
///
/// The platform CSPRNG is the only randomness source; if it is unavailable
/// the generation fails rather than falling back to anything weaker.
pub fn new_key_pair() -> Result<Vec<u8>> {
    let rng = SystemRandom::new();
    let pkcs8 = EcdsaKeyPair::generate_pkcs8(&ECDSA_P256_SHA256_FIXED_SIGNING, &rng)
        .map_err(|e| WalletError::Crypto(format!("Failed to generate ECDSA key pair: {e}")))?
        .as_ref()
        .to_vec();
    Ok(pkcs8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_digest_known_vector() {
        // SHA-256 of the empty string
        let digest = sha256_digest(b"");
        assert_eq!(
            data_encoding::HEXLOWER.encode(&digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_base58_round_trip() {
        let data = vec![0x00, 0x01, 0xff, 0x42];
        let encoded = base58_encode(&data);
        let decoded = base58_decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn test_base58_leading_zeros_become_ones() {
        let encoded = base58_encode(&[0x00, 0x00, 0x01]);
        assert!(encoded.starts_with("11"));
    }

    #[test]
    fn test_base58_decode_rejects_bad_alphabet() {
        assert!(base58_decode("0OIl").is_err());
    }
}
