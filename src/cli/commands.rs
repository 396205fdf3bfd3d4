use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "keybook")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "createwallet", about = "Create a new wallet")]
    Createwallet,
    #[command(name = "listaddresses", about = "Print local wallet addresses")]
    ListAddresses,
    #[command(name = "showwallet", about = "Print the keys behind an address")]
    ShowWallet {
        #[arg(help = "The wallet address")]
        address: String,
    },
    #[command(
        name = "validateaddress",
        about = "Check that an address is well-formed and its checksum verifies"
    )]
    ValidateAddress {
        #[arg(help = "The address to check")]
        address: String,
    },
}
