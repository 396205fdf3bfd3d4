//! Wallet integration tests
//!
//! Exercises the full pipeline: key generation, address derivation,
//! persistence, and reload, the way the CLI drives it.

use keybook::{hash_pub_key, AddressCodec, Wallet, Wallets, PUBLIC_KEY_LEN};
use std::collections::HashSet;
use tempfile::tempdir;

#[test]
fn test_create_save_reload_wallet() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("wallet.dat");
    let codec = AddressCodec::new(0x00);

    let mut wallets = Wallets::load(&path, &codec).unwrap();
    assert!(wallets.is_empty());

    let address = wallets.create_wallet(&codec).unwrap();
    wallets.save(&path).unwrap();

    let reloaded = Wallets::load(&path, &codec).unwrap();
    let wallet = reloaded.get_wallet(&address).unwrap();

    // The address on disk is nothing but the public key run back through
    // the codec
    assert_eq!(wallet.get_address(&codec), address);
    let decoded = AddressCodec::decode(&address).unwrap();
    assert_eq!(decoded.version, 0x00);
    assert_eq!(decoded.pub_key_hash, hash_pub_key(wallet.get_public_key()));
}

#[test]
fn test_generated_addresses_look_like_mainnet_addresses() {
    let codec = AddressCodec::new(0x00);
    let wallet = Wallet::new().unwrap();
    let address = wallet.get_address(&codec);

    // Version 0x00 puts a zero byte in front of the payload, which base58
    // renders as a leading '1'
    assert!(address.starts_with('1'));
    for c in address.chars() {
        assert!(
            "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz".contains(c),
            "character {c:?} outside base58 alphabet"
        );
    }
}

#[test]
fn test_thousand_wallets_are_distinct() {
    let codec = AddressCodec::new(0x00);
    let mut public_keys = HashSet::new();
    let mut addresses = HashSet::new();

    for _ in 0..1000 {
        let wallet = Wallet::new().unwrap();
        assert_eq!(wallet.get_public_key().len(), PUBLIC_KEY_LEN);
        assert!(public_keys.insert(wallet.get_public_key().to_vec()));
        assert!(addresses.insert(wallet.get_address(&codec)));
    }

    assert_eq!(public_keys.len(), 1000);
    assert_eq!(addresses.len(), 1000);
}

#[test]
fn test_wallet_file_grows_across_runs() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("wallet.dat");
    let codec = AddressCodec::new(0x00);

    // Three separate load/create/save cycles, like three CLI invocations
    for expected in 1..=3 {
        let mut wallets = Wallets::load(&path, &codec).unwrap();
        wallets.create_wallet(&codec).unwrap();
        wallets.save(&path).unwrap();
        assert_eq!(wallets.len(), expected);
    }

    let wallets = Wallets::load(&path, &codec).unwrap();
    assert_eq!(wallets.get_addresses().len(), 3);
}

#[test]
fn test_multiple_networks_coexist() {
    let mainnet = AddressCodec::new(0x00);
    let testnet = AddressCodec::new(0x6f);
    let wallet = Wallet::new().unwrap();

    let mainnet_address = wallet.get_address(&mainnet);
    let testnet_address = wallet.get_address(&testnet);
    assert_ne!(mainnet_address, testnet_address);

    // Same key hash behind both, only the version differs
    let a = AddressCodec::decode(&mainnet_address).unwrap();
    let b = AddressCodec::decode(&testnet_address).unwrap();
    assert_eq!(a.version, 0x00);
    assert_eq!(b.version, 0x6f);
    assert_eq!(a.pub_key_hash, b.pub_key_hash);
}
