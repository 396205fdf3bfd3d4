//! Wallet key management
//!
//! This module handles key pair generation, the fixed-width public key
//! representation, and the persisted wallet collection.

#[allow(clippy::module_inception)]
pub mod wallet;
pub mod wallets;

pub use wallet::{Wallet, FIELD_LEN, PUBLIC_KEY_LEN};
pub use wallets::{Wallets, WALLET_SCHEMA_VERSION};
