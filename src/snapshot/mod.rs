//! Snapshot Module
//!
//! Flat binary persistence for the live entry set.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Record 1                                                │
//! │ ┌────────────────┬───────────┬────────────────┬───────┐ │
//! │ │ KeyLen (usize) │ Key + NUL │ ValLen (usize) │ Value │ │
//! │ └────────────────┴───────────┴────────────────┴───────┘ │
//! ├─────────────────────────────────────────────────────────┤
//! │ Record 2 ...                                            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! - Length counters are machine-native `usize`: native width and native
//!   byte order. Snapshots are not portable across word size or endianness;
//!   the layout is fixed by compatibility with existing dump files.
//! - `KeyLen` counts the key bytes plus the single NUL byte written after
//!   the key. An empty key is `KeyLen = 1` followed by one NUL.
//! - `ValLen` counts exactly the value bytes; zero-length values are valid.
//! - No header, version tag, checksum, or footer; records run until
//!   end-of-stream.

mod reader;
mod writer;

pub use reader::{Record, SnapshotReader};
pub use writer::SnapshotWriter;

/// Width in bytes of a serialized length counter
pub const LEN_BYTES: usize = std::mem::size_of::<usize>();
