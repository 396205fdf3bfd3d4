use crate::address::AddressCodec;
use crate::error::{Result, WalletError};
use crate::utils::{deserialize, serialize};
use crate::wallet::Wallet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

/// Version of the on-disk wallet record. Bump on any layout change.
pub const WALLET_SCHEMA_VERSION: u32 = 1;

const CURVE_TAG: &str = "ecdsa-p256";

/// On-disk record: explicit schema version and curve tag in front of the
/// wallet list, so old files are rejected loudly instead of misread.
/// Addresses are deliberately not part of the record; they are recomputed
/// from the public keys on every load.
#[derive(Serialize, Deserialize, bincode::Encode, bincode::Decode)]
struct WalletsFile {
    schema: u32,
    curve: String,
    wallets: Vec<Wallet>,
}

/// In-memory wallet collection, keyed by address
pub struct Wallets {
    wallets: HashMap<String, Wallet>,
}

impl Default for Wallets {
    fn default() -> Self {
        Self::new()
    }
}

impl Wallets {
    pub fn new() -> Wallets {
        Wallets {
            wallets: HashMap::new(),
        }
    }

    /// Load the collection from `path`.
    ///
    /// A missing file means a first run and yields an empty collection; any
    /// other I/O failure, an unknown schema, or a wallet whose stored public
    /// key does not match its private key is an error. Map keys are the
    /// addresses recomputed with `codec`, never trusted from disk.
    pub fn load(path: &Path, codec: &AddressCodec) -> Result<Wallets> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No wallet file at {}, starting empty", path.display());
                return Ok(Wallets::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut buf = vec![];
        file.read_to_end(&mut buf)?;
        let record: WalletsFile = deserialize(buf.as_slice())?;

        if record.schema != WALLET_SCHEMA_VERSION {
            return Err(WalletError::Serialization(format!(
                "Unknown wallet file schema: {} (expected {})",
                record.schema, WALLET_SCHEMA_VERSION
            )));
        }
        if record.curve != CURVE_TAG {
            return Err(WalletError::Serialization(format!(
                "Unknown curve tag: {} (expected {CURVE_TAG})",
                record.curve
            )));
        }

        let mut wallets = HashMap::new();
        for wallet in record.wallets {
            wallet.verify_public_key()?;
            let address = wallet.get_address(codec);
            wallets.insert(address, wallet);
        }
        Ok(Wallets { wallets })
    }

    /// Write the collection to `path`, truncating any previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let record = WalletsFile {
            schema: WALLET_SCHEMA_VERSION,
            curve: CURVE_TAG.to_string(),
            wallets: self.wallets.values().cloned().collect(),
        };
        let bytes = serialize(&record)?;

        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes.as_slice())?;
        writer.flush()?;
        Ok(())
    }

    /// Generate a new wallet, insert it under its address, return the address
    pub fn create_wallet(&mut self, codec: &AddressCodec) -> Result<String> {
        let wallet = Wallet::new()?;
        let address = wallet.get_address(codec);
        self.wallets.insert(address.clone(), wallet);
        Ok(address)
    }

    pub fn get_addresses(&self) -> Vec<String> {
        let mut addresses = vec![];
        for address in self.wallets.keys() {
            addresses.push(address.clone())
        }
        addresses
    }

    pub fn get_wallet(&self, address: &str) -> Option<&Wallet> {
        self.wallets.get(address)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}
