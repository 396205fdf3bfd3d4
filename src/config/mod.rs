//! Configuration
//!
//! Runtime settings for the CLI: where the wallet file lives and which
//! address version byte to stamp on new addresses. Built once in `main`
//! and passed down; there is no global config state.

pub mod settings;

pub use settings::{Settings, DEFAULT_ADDRESS_VERSION, DEFAULT_WALLET_FILE};
