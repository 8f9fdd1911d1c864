//! Table implementation
//!
//! Chained hash table with an outer `RwLock` over the slot array and one
//! `Mutex` per bucket.

use std::io::{Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::config::Config;
use crate::error::Result;
use crate::hash::bucket_index;
use crate::snapshot::{SnapshotReader, SnapshotWriter};

use super::Entry;

/// A chain of entries sharing one slot. Unordered; scans are linear.
type Bucket = Vec<Entry>;

/// The hash index
///
/// ## Concurrency
/// - insert/get/remove hold the outer read lock plus exactly one bucket
///   lock, so operations on different buckets proceed fully in parallel
/// - growth, serialization, and deserialization hold the outer write lock
///   for their whole traversal; bucket locks are only ever taken under the
///   outer read lock, so the write guard excludes every bucket-level
///   operation without any lock-ordering protocol
/// - the live counter is atomic and only adjusted while the owning bucket
///   lock is held
pub struct Table {
    /// Bucket slots; slot count is the current capacity
    buckets: RwLock<Vec<Mutex<Bucket>>>,

    /// Live entry count
    len: AtomicUsize,

    /// Fill ratio above which capacity doubles
    load_factor: f64,
}

impl Table {
    /// Create an empty table with the given slot count and default load factor
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        Self::with_config(&Config {
            initial_capacity,
            ..Config::default()
        })
    }

    /// Create an empty table from a config
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let buckets = (0..config.initial_capacity)
            .map(|_| Mutex::new(Bucket::new()))
            .collect();

        Ok(Self {
            buckets: RwLock::new(buckets),
            len: AtomicUsize::new(0),
            load_factor: config.load_factor,
        })
    }

    // =========================================================================
    // Key Operations
    // =========================================================================

    /// Insert or update a key-value pair
    ///
    /// Stores copies of both key and value. Updating an existing key
    /// replaces its value in place and leaves the live count unchanged.
    pub fn insert(&self, key: &str, value: &[u8]) {
        self.grow_if_needed();

        let buckets = self.buckets.read();
        let index = bucket_index(key, buckets.len());
        let mut bucket = buckets[index].lock();
        self.upsert(&mut bucket, key, value);
    }

    /// Get a value by key
    ///
    /// Returns an independent copy of the value; `None` means not found.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let buckets = self.buckets.read();
        let index = bucket_index(key, buckets.len());
        let bucket = buckets[index].lock();
        bucket
            .iter()
            .find(|entry| entry.key() == key)
            .map(|entry| entry.value().to_vec())
    }

    /// Remove a key
    ///
    /// Returns whether the key was present. Removal is immediate and
    /// physical; the chain keeps no tombstones.
    pub fn remove(&self, key: &str) -> bool {
        let buckets = self.buckets.read();
        let index = bucket_index(key, buckets.len());
        let mut bucket = buckets[index].lock();
        match bucket.iter().position(|entry| entry.key() == key) {
            Some(position) => {
                bucket.remove(position);
                self.len.fetch_sub(1, Ordering::Relaxed);
                true
            }
            None => false,
        }
    }

    /// Collect every live key
    pub fn keys(&self) -> Vec<String> {
        let mut buckets = self.buckets.write();
        let mut keys = Vec::with_capacity(self.len());
        for slot in buckets.iter_mut() {
            keys.extend(slot.get_mut().iter().map(|entry| entry.key().to_string()));
        }
        keys
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current bucket-slot count
    pub fn capacity(&self) -> usize {
        self.buckets.read().len()
    }

    // =========================================================================
    // Snapshot I/O
    // =========================================================================

    /// Write every live entry to the sink in slot order
    ///
    /// Holds the write guard for the whole traversal, so the snapshot is a
    /// consistent point-in-time view even under concurrent mutation.
    pub fn serialize_into<W: Write>(&self, sink: W) -> Result<u64> {
        let mut buckets = self.buckets.write();
        let mut writer = SnapshotWriter::new(sink);
        for slot in buckets.iter_mut() {
            for entry in slot.get_mut().iter() {
                writer.append(entry.key(), entry.value())?;
            }
        }
        writer.finish()
    }

    /// Merge records from a stream, returning the number applied
    ///
    /// Each record goes through the same upsert and growth logic as
    /// `insert`, so duplicate keys across snapshots overwrite rather than
    /// duplicate. The write guard is held for the whole merge.
    pub fn deserialize_from<R: Read>(&self, source: R) -> Result<u64> {
        let mut buckets = self.buckets.write();
        let mut reader = SnapshotReader::new(source);
        let mut records = 0u64;

        while let Some(record) = reader.read_record()? {
            if self.over_threshold(buckets.len()) {
                self.grow(&mut buckets);
            }
            let index = bucket_index(&record.key, buckets.len());
            self.upsert(buckets[index].get_mut(), &record.key, &record.value);
            records += 1;
        }

        Ok(records)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Update-in-place or push a new entry, bumping the live count only on
    /// the new-entry path. Caller holds the bucket's lock.
    fn upsert(&self, bucket: &mut Bucket, key: &str, value: &[u8]) {
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key() == key) {
            entry.replace_value(value);
            return;
        }
        bucket.push(Entry::new(key.to_string(), value.to_vec()));
        self.len.fetch_add(1, Ordering::Relaxed);
    }

    /// Grow ahead of an insert if the fill ratio crossed the threshold
    fn grow_if_needed(&self) {
        // Fast path: skip the write lock while clearly under the threshold.
        // The decision is re-checked once the write lock is held.
        {
            let buckets = self.buckets.read();
            if !self.over_threshold(buckets.len()) {
                return;
            }
        }

        let mut buckets = self.buckets.write();
        // Another insert may have grown the table while we waited.
        if self.over_threshold(buckets.len()) {
            self.grow(&mut buckets);
        }
    }

    fn over_threshold(&self, capacity: usize) -> bool {
        self.len() as f64 / capacity as f64 > self.load_factor
    }

    /// Double capacity and rehash every entry into a fresh slot array
    ///
    /// Entries are moved, not cloned: only the chains are relinked. Caller
    /// holds the write guard, so no bucket-level operation is in flight
    /// against the old slot array.
    fn grow(&self, buckets: &mut Vec<Mutex<Bucket>>) {
        let old_capacity = buckets.len();
        let new_capacity = old_capacity * 2;
        let mut new_buckets: Vec<Mutex<Bucket>> =
            (0..new_capacity).map(|_| Mutex::new(Bucket::new())).collect();

        for slot in buckets.iter_mut() {
            for entry in slot.get_mut().drain(..) {
                let index = bucket_index(entry.key(), new_capacity);
                new_buckets[index].get_mut().push(entry);
            }
        }

        *buckets = new_buckets;
        tracing::debug!("table grown: {} -> {} slots", old_capacity, new_capacity);
    }
}
