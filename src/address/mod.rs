//! Bitcoin-style base58-check address derivation
//!
//! This module turns a raw public key into a human-shareable address and
//! back: double-SHA-256 digest of the key, a one-byte network version in
//! front, a 4-byte checksum behind, base58 over the lot.

pub mod codec;

pub use codec::{
    hash_pub_key, validate_address, AddressCodec, DecodedAddress, ADDRESS_CHECK_SUM_LEN,
};
