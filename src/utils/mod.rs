//! Utility functions and helpers
//!
//! Cryptographic primitives and encoding functions shared by the
//! address codec and the wallet modules.

pub mod crypto;
pub mod serialization;

pub use crypto::{base58_decode, base58_encode, new_key_pair, sha256_digest};

pub use serialization::{deserialize, serialize};
