//! Pluggable storage backends for Trailproof events.
//!
//! This crate provides:
//! - The [`TrailStore`] trait for append-only event storage
//! - [`QueryFilters`] and one cursor pagination routine shared by all backends
//! - [`MemoryStore`], a volatile backend
//! - [`JsonlStore`], a durable backend built on `trailproof-journal`
//!
//! ```rust
//! use trailproof_store::{MemoryStore, QueryFilters, TrailStore};
//! use trailproof_core::GENESIS_HASH;
//!
//! let store = MemoryStore::new();
//! assert_eq!(store.last_hash(), GENESIS_HASH);
//! assert!(store.query(&QueryFilters::new()).events.is_empty());
//! ```

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Query filters and pagination.
pub mod filter;
/// JSONL file backend.
pub mod jsonl;
/// In-memory backend.
pub mod memory;
/// Storage backend trait.
pub mod traits;

pub use error::StoreError;
pub use filter::{paginate, QueryFilters, QueryResult, DEFAULT_LIMIT};
pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use traits::TrailStore;
pub use trailproof_journal::{ReadMode, WriteOptions};
