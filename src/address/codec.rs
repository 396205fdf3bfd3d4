use crate::error::{Result, WalletError};
use crate::utils::{base58_decode, base58_encode, sha256_digest};

pub const ADDRESS_CHECK_SUM_LEN: usize = 4;

/// Encodes public keys into base58-check addresses for one network.
///
/// The version byte is injected at construction so different networks can
/// coexist in one process; nothing here reaches for a global constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCodec {
    version: u8,
}

/// The two fields recovered from a well-formed address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    pub version: u8,
    pub pub_key_hash: Vec<u8>,
}

impl AddressCodec {
    pub fn new(version: u8) -> AddressCodec {
        AddressCodec { version }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Derive the address for a public key.
    ///
    /// Layout before encoding: version + pub_key_hash + checksum. The result
    /// is deterministic and uses only the 58-character Bitcoin alphabet, so
    /// leading zero payload bytes show up as leading '1' characters.
    pub fn encode(&self, pub_key: &[u8]) -> String {
        let pub_key_hash = hash_pub_key(pub_key);
        let mut payload: Vec<u8> = vec![];
        payload.push(self.version);
        payload.extend(pub_key_hash.as_slice());
        let checksum = checksum(payload.as_slice());
        payload.extend(checksum.as_slice());
        base58_encode(payload.as_slice())
    }

    /// Take an address apart into its version byte and public key hash.
    ///
    /// Fails with `InvalidEncoding` for anything that is not base58 or is
    /// too short to carry version + checksum, and with `ChecksumMismatch`
    /// when the trailing 4 bytes do not verify. A corrupted address is never
    /// returned as data. The version byte is reported as found; callers that
    /// only accept one network compare it themselves.
    pub fn decode(address: &str) -> Result<DecodedAddress> {
        let payload = base58_decode(address)?;
        if payload.len() < ADDRESS_CHECK_SUM_LEN + 1 {
            return Err(WalletError::InvalidEncoding(format!(
                "Address payload too short: {} bytes",
                payload.len()
            )));
        }

        let checksum_start = payload.len() - ADDRESS_CHECK_SUM_LEN;
        let actual_checksum = &payload[checksum_start..];
        let expected_checksum = checksum(&payload[..checksum_start]);
        if actual_checksum != expected_checksum.as_slice() {
            return Err(WalletError::ChecksumMismatch);
        }

        Ok(DecodedAddress {
            version: payload[0],
            pub_key_hash: payload[1..checksum_start].to_vec(),
        })
    }
}

/// Hash a public key for use as an address payload: SHA-256 applied twice.
///
/// Canonical Bitcoin shortens the digest with RIPEMD-160 after the first
/// SHA-256 round; this scheme keeps the full 32-byte double-SHA-256 digest
/// instead, so addresses come out a few characters longer.
pub fn hash_pub_key(pub_key: &[u8]) -> Vec<u8> {
    let first_sha = sha256_digest(pub_key);
    sha256_digest(first_sha.as_slice())
}

fn checksum(payload: &[u8]) -> Vec<u8> {
    let first_sha = sha256_digest(payload);
    let second_sha = sha256_digest(first_sha.as_slice());
    second_sha[0..ADDRESS_CHECK_SUM_LEN].to_vec()
}

/// Boolean convenience wrapper around [`AddressCodec::decode`]
pub fn validate_address(address: &str) -> bool {
    AddressCodec::decode(address).is_ok()
}
