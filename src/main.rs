// Entry point for the wallet CLI
use clap::Parser;
use data_encoding::HEXLOWER;
use keybook::{AddressCodec, Command, Opt, Settings, Wallets};
use log::{error, LevelFilter};
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    let codec = AddressCodec::new(settings.address_version());

    match command {
        // Generate a key pair, insert it under its derived address, persist
        Command::Createwallet => {
            let mut wallets = Wallets::load(settings.wallet_file(), &codec)?;
            let address = wallets.create_wallet(&codec)?;
            wallets.save(settings.wallet_file())?;
            println!("Your new address: {address}");
        }
        Command::ListAddresses => {
            let wallets = Wallets::load(settings.wallet_file(), &codec)?;
            let mut addresses = wallets.get_addresses();
            addresses.sort();
            for address in addresses {
                println!("{address}");
            }
        }
        Command::ShowWallet { address } => {
            let wallets = Wallets::load(settings.wallet_file(), &codec)?;
            let wallet = wallets
                .get_wallet(&address)
                .ok_or_else(|| format!("No wallet for address {address}"))?;
            println!("Address:    {address}");
            println!("Public key: {}", HEXLOWER.encode(wallet.get_public_key()));
        }
        Command::ValidateAddress { address } => {
            // Decode instead of a bare yes/no so the user sees what failed
            let decoded = AddressCodec::decode(&address)?;
            println!(
                "Valid address (version {:#04x}, {}-byte public key hash)",
                decoded.version,
                decoded.pub_key_hash.len()
            );
        }
    }

    Ok(())
}
