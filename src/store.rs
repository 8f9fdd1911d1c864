//! Store Module
//!
//! The public facade binding configuration, the table, and snapshot I/O.
//!
//! ## Responsibilities
//! - Validate configuration at open
//! - Route key operations to the table
//! - Serialize/deserialize the table against byte sinks, streams, and files

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{ChainError, Result};
use crate::table::Table;

/// The main key-value store
///
/// ## Concurrency Model
///
/// Every method takes `&self`; share a `Store` across threads with `Arc`.
/// - **insert/get/delete**: lock a single bucket, so operations on
///   different buckets run fully in parallel
/// - **serialize/deserialize/growth**: take the table exclusively for the
///   duration of their traversal, so snapshots are never torn
pub struct Store {
    /// Store configuration
    config: Config,

    /// The hash index (internal locking)
    table: Table,
}

impl Store {
    /// Open an empty store with the given config
    pub fn open(config: Config) -> Result<Self> {
        let table = Table::with_config(&config)?;

        tracing::debug!(
            "store opened: {} slots, load factor {}",
            config.initial_capacity,
            config.load_factor
        );

        Ok(Self { config, table })
    }

    /// Open an empty store with the given slot count
    ///
    /// Uses the default config with the specified initial capacity.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        Self::open(Config::builder().initial_capacity(initial_capacity).build())
    }

    // =========================================================================
    // Key Operations
    // =========================================================================

    /// Insert or update a key-value pair
    ///
    /// Stores copies of the key and value; a later `get` with the same key
    /// returns an equal-content copy. Updating an existing key replaces its
    /// value and leaves the live count unchanged.
    pub fn insert(&self, key: &str, value: &[u8]) -> Result<()> {
        self.table.insert(key, value);
        Ok(())
    }

    /// Get a value by key
    ///
    /// Returns an independent copy owned by the caller; later mutations of
    /// the store never invalidate it. `None` means not found, which is an
    /// expected outcome rather than an error.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.table.get(key)
    }

    /// Delete a key
    ///
    /// Removal is immediate and physical. Deleting an absent key reports
    /// `KeyNotFound` and leaves the store untouched.
    pub fn delete(&self, key: &str) -> Result<()> {
        if self.table.remove(key) {
            Ok(())
        } else {
            Err(ChainError::KeyNotFound)
        }
    }

    /// Collect every live key
    pub fn keys(&self) -> Vec<String> {
        self.table.keys()
    }

    // =========================================================================
    // Snapshot I/O
    // =========================================================================

    /// Serialize all live entries to a byte sink
    ///
    /// Returns the number of records written. A failed write may leave the
    /// sink truncated; no rollback is attempted.
    pub fn serialize<W: Write>(&self, sink: W) -> Result<u64> {
        let records = self.table.serialize_into(sink)?;
        tracing::debug!("serialized {} records", records);
        Ok(records)
    }

    /// Merge records from a byte stream into the store
    ///
    /// Each record is applied with insert/update semantics, so keys already
    /// present are overwritten rather than duplicated.
    pub fn deserialize<R: Read>(&self, source: R) -> Result<u64> {
        let records = self.table.deserialize_from(source)?;
        tracing::debug!("deserialized {} records", records);
        Ok(records)
    }

    /// Serialize to a file at the given path (create or truncate)
    pub fn save_to_path(&self, path: &Path) -> Result<u64> {
        let file = File::create(path)?;
        let records = self.serialize(BufWriter::new(file))?;
        tracing::info!("saved {} records to {}", records, path.display());
        Ok(records)
    }

    /// Merge records from a file at the given path
    pub fn load_from_path(&self, path: &Path) -> Result<u64> {
        let file = File::open(path)?;
        let records = self.deserialize(BufReader::new(file))?;
        tracing::info!("loaded {} records from {}", records, path.display());
        Ok(records)
    }

    /// Close the store
    ///
    /// Entries, slots, and locks are released when the store drops; this
    /// only makes the end of its lifetime explicit at call sites.
    pub fn close(self) {
        tracing::debug!("store closed: {} entries released", self.len());
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current bucket-slot count
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
