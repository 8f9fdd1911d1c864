//! # ChainKV
//!
//! A concurrent, in-process key-value store with:
//! - Chained hashing with per-bucket locking
//! - Transparent growth once the fill ratio crosses a threshold
//! - Snapshot persistence to a flat binary stream
//! - Caller-owned copies on every lookup
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Store API                              │
//! │       insert / get / delete / serialize / deserialize        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Table                                 │
//! │    RwLock ── Vec<Mutex<Bucket>> ── atomic live counter       │
//! │    (read lock + one bucket lock per key operation;           │
//! │     write lock for resize and whole-table traversal)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Hash     │          │  Snapshot   │
//!   │   (djb2)    │          │ (flat file) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod hash;
pub mod table;
pub mod snapshot;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ChainError, Result};
pub use config::Config;
pub use store::Store;
pub use table::Table;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ChainKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
