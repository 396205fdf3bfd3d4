use crate::error::{Result, WalletError};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_WALLET_FILE: &str = "wallet.dat";
/// Mainnet pay-to-pubkey-hash version byte
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x00;

const WALLET_FILE_KEY: &str = "WALLET_FILE";
const ADDRESS_VERSION_KEY: &str = "ADDRESS_VERSION";

/// Runtime settings, resolved from defaults plus environment overrides
#[derive(Debug, Clone)]
pub struct Settings {
    wallet_file: PathBuf,
    address_version: u8,
}

impl Settings {
    pub fn new(wallet_file: PathBuf, address_version: u8) -> Settings {
        Settings {
            wallet_file,
            address_version,
        }
    }

    /// Resolve settings from the environment.
    ///
    /// `WALLET_FILE` overrides the wallet file path; `ADDRESS_VERSION`
    /// overrides the version byte, as decimal or `0x`-prefixed hex. A value
    /// that does not parse is a configuration error, not a silent default.
    pub fn from_env() -> Result<Settings> {
        let wallet_file = match env::var(WALLET_FILE_KEY) {
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_WALLET_FILE),
        };

        let address_version = match env::var(ADDRESS_VERSION_KEY) {
            Ok(raw) => parse_version(&raw)?,
            Err(_) => DEFAULT_ADDRESS_VERSION,
        };

        Ok(Settings::new(wallet_file, address_version))
    }

    pub fn wallet_file(&self) -> &std::path::Path {
        self.wallet_file.as_path()
    }

    pub fn address_version(&self) -> u8 {
        self.address_version
    }
}

fn parse_version(raw: &str) -> Result<u8> {
    let parsed = match raw.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => raw.parse::<u8>(),
    };
    parsed.map_err(|e| {
        WalletError::Config(format!("Invalid {ADDRESS_VERSION_KEY} value {raw:?}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_decimal_and_hex() {
        assert_eq!(parse_version("0").unwrap(), 0);
        assert_eq!(parse_version("111").unwrap(), 111);
        assert_eq!(parse_version("0x6f").unwrap(), 0x6f);
        assert_eq!(parse_version("255").unwrap(), 255);
    }

    #[test]
    fn test_parse_version_rejects_garbage() {
        assert!(parse_version("testnet").is_err());
        assert!(parse_version("256").is_err());
        assert!(parse_version("0xzz").is_err());
    }
}
