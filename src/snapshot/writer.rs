//! Snapshot writer
//!
//! Appends length-prefixed records to a byte sink.

use std::io::Write;

use crate::error::Result;

/// Writes table entries to a snapshot sink
pub struct SnapshotWriter<W: Write> {
    sink: W,
    records_written: u64,
}

impl<W: Write> SnapshotWriter<W> {
    /// Create a writer over a byte sink
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            records_written: 0,
        }
    }

    /// Append one record
    ///
    /// The serialized key length counts the trailing NUL byte written after
    /// the key bytes.
    pub fn append(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let key_len = key.len() + 1;
        self.sink.write_all(&key_len.to_ne_bytes())?;
        self.sink.write_all(key.as_bytes())?;
        self.sink.write_all(&[0u8])?;
        self.sink.write_all(&value.len().to_ne_bytes())?;
        self.sink.write_all(value)?;

        self.records_written += 1;
        Ok(())
    }

    /// Flush the sink and return the number of records written
    pub fn finish(mut self) -> Result<u64> {
        self.sink.flush()?;
        Ok(self.records_written)
    }
}
