//! Snapshot reader
//!
//! Sequential record reads from a byte stream until end-of-stream.

use std::io::{ErrorKind, Read};

use crate::error::{ChainError, Result};

use super::LEN_BYTES;

/// One decoded snapshot record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: Vec<u8>,
}

/// Reads records from a snapshot stream
pub struct SnapshotReader<R: Read> {
    source: R,
}

impl<R: Read> SnapshotReader<R> {
    /// Create a reader over a byte stream
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the next record
    ///
    /// Returns `Ok(None)` on a clean end-of-stream at a record boundary.
    /// A stream that ends inside a record is corrupt, not finished.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        // The key length counter doubles as the end-of-stream probe.
        let key_len = match self.read_len()? {
            Some(len) => len,
            None => return Ok(None),
        };
        if key_len == 0 {
            return Err(ChainError::Snapshot(
                "record with zero key length".to_string(),
            ));
        }

        let mut key_bytes = vec![0u8; key_len];
        self.read_exact_or_corrupt(&mut key_bytes, "a key")?;
        if key_bytes.pop() != Some(0) {
            return Err(ChainError::Snapshot(
                "key is not NUL-terminated".to_string(),
            ));
        }
        let key = String::from_utf8(key_bytes)
            .map_err(|_| ChainError::Snapshot("key is not valid UTF-8".to_string()))?;

        let value_len = self.read_len()?.ok_or_else(|| {
            ChainError::Snapshot("stream ends before a value length".to_string())
        })?;
        let mut value = vec![0u8; value_len];
        self.read_exact_or_corrupt(&mut value, "a value")?;

        Ok(Some(Record { key, value }))
    }

    /// Read one native-width length counter
    ///
    /// `Ok(None)` means the stream ended cleanly before the first byte;
    /// ending partway through the counter is corruption.
    fn read_len(&mut self) -> Result<Option<usize>> {
        let mut buf = [0u8; LEN_BYTES];
        let mut filled = 0;
        while filled < LEN_BYTES {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(ChainError::Snapshot(
                        "stream ends inside a length counter".to_string(),
                    ))
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Some(usize::from_ne_bytes(buf)))
    }

    /// `read_exact` that reports a premature end-of-stream as corruption
    fn read_exact_or_corrupt(&mut self, buf: &mut [u8], what: &str) -> Result<()> {
        self.source.read_exact(buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                ChainError::Snapshot(format!("stream ends inside {}", what))
            } else {
                ChainError::Io(e)
            }
        })
    }
}
