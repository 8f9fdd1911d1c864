//! ChainKV CLI
//!
//! Command-line interface for working with ChainKV snapshot files. Each
//! invocation loads the snapshot (when present), applies one command, and
//! saves the snapshot back if anything changed.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use chainkv::{ChainError, Config, Store};

/// ChainKV CLI
#[derive(Parser, Debug)]
#[command(name = "chainkv")]
#[command(about = "Concurrent hash-indexed key-value store with snapshot persistence")]
#[command(version)]
struct Args {
    /// Snapshot file to operate on
    #[arg(short, long, default_value = "chainkv.bin")]
    file: PathBuf,

    /// Initial bucket-slot count for the in-memory table
    #[arg(short, long, default_value = "128")]
    capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List all keys
    Keys,

    /// Print the number of live entries
    Count,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> chainkv::Result<()> {
    let config = Config::builder().initial_capacity(args.capacity).build();
    let store = Store::open(config)?;

    // Every command starts from the snapshot on disk, if there is one.
    if args.file.exists() {
        store.load_from_path(&args.file)?;
    }

    match args.command {
        Commands::Get { key } => match store.get(&key) {
            Some(value) => println!("{}", String::from_utf8_lossy(&value)),
            None => return Err(ChainError::KeyNotFound),
        },

        Commands::Set { key, value } => {
            store.insert(&key, value.as_bytes())?;
            store.save_to_path(&args.file)?;
        }

        Commands::Del { key } => {
            store.delete(&key)?;
            store.save_to_path(&args.file)?;
        }

        Commands::Keys => {
            for key in store.keys() {
                println!("{}", key);
            }
        }

        Commands::Count => println!("{}", store.len()),
    }

    store.close();
    Ok(())
}
