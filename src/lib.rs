//! # Keybook - Bitcoin-Style Wallet and Address Generator
//!
//! A small library and CLI for generating ECDSA P-256 key pairs and deriving
//! checksummed base58 addresses from them, the way Bitcoin does it.
//!
//! ## How the Code Is Organized
//! - `wallet/`: key pair generation and the persisted wallet collection
//! - `address/`: the derivation pipeline (double SHA-256 digest, version
//!   byte, 4-byte checksum, base58)
//! - `config/`: runtime settings (wallet file path, address version byte)
//! - `error/`: typed errors for every operation
//! - `utils/`: cryptographic primitives and serialization helpers
//! - `cli/`: command-line interface
//!
//! ## Key Design Decisions
//! - ECDSA P-256 keys via ring, generated only from the platform CSPRNG
//! - Public keys serialized as fixed-width X || Y coordinates (64 bytes),
//!   leading zero bytes preserved, so every key hashes to a stable address
//! - Double SHA-256 as the public key digest (32 bytes) rather than
//!   Bitcoin's SHA-256 + RIPEMD-160
//! - Addresses are derived, never stored: the wallet file persists key pairs
//!   under an explicit schema version and addresses are recomputed on load
//! - The version byte and wallet file path are injected configuration, not
//!   hidden constants

pub mod address;
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use address::{
    hash_pub_key, validate_address, AddressCodec, DecodedAddress, ADDRESS_CHECK_SUM_LEN,
};
pub use cli::{Command, Opt};
pub use config::{Settings, DEFAULT_ADDRESS_VERSION, DEFAULT_WALLET_FILE};
pub use error::{Result, WalletError};
pub use utils::{base58_decode, base58_encode, new_key_pair, sha256_digest};
pub use wallet::{Wallet, Wallets, FIELD_LEN, PUBLIC_KEY_LEN, WALLET_SCHEMA_VERSION};
