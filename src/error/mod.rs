//! Error handling for wallet and address operations
//!
//! This module provides typed errors for every operation in the crate so
//! callers can decide what to do instead of getting a crashed process.

use std::fmt;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Error types for wallet and address operations
#[derive(Debug, Clone)]
pub enum WalletError {
    /// Cryptographic operation errors, including an unavailable or exhausted
    /// secure random source. These abort the operation and are never retried
    /// against a weaker source.
    Crypto(String),
    /// Input that is not valid base58-check structure (characters outside the
    /// alphabet, or a payload too short to carry version + checksum)
    InvalidEncoding(String),
    /// The address checksum does not match its payload. The address is
    /// corrupted or tampered with and must be rejected.
    ChecksumMismatch,
    /// Serialization/deserialization errors, including an unknown on-disk
    /// schema or curve tag
    Serialization(String),
    /// File I/O errors other than "the wallet file does not exist yet"
    Io(String),
    /// Configuration errors (bad environment overrides)
    Config(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            WalletError::InvalidEncoding(msg) => write!(f, "Invalid encoding: {msg}"),
            WalletError::ChecksumMismatch => write!(f, "Address checksum mismatch"),
            WalletError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            WalletError::Io(msg) => write!(f, "I/O error: {msg}"),
            WalletError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Io(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for WalletError {
    fn from(err: bincode::error::EncodeError) -> Self {
        WalletError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for WalletError {
    fn from(err: bincode::error::DecodeError) -> Self {
        WalletError::Serialization(err.to_string())
    }
}
