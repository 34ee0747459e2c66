//! core command line arguments
use clap::Parser;

/// cmd line args
#[derive(Parser, Default, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// set release environment
    #[arg(
        short,
        long,
        help = "Set release environment (dev, prod)",
        default_value = "dev"
    )]
    pub release_env: String,
    /// Application port
    #[arg(long, help = "Set app port", default_value = "5555")]
    pub port: u16,
    /// LMDB location
    #[arg(
        long,
        help = "Directory of the LMDB environment holding pets.",
        default_value = ".petstore/lmdb"
    )]
    pub db_path: String,
    /// Remove all pets from db on app startup
    #[arg(
        long,
        help = "this will clear all pets and reset ids in the database",
        default_value = "false"
    )]
    pub clear_pets: bool,
}
