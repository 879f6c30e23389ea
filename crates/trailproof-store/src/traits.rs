//! Storage backend trait.

use crate::error::StoreError;
use crate::filter::{QueryFilters, QueryResult};
use trailproof_core::TrailEvent;

/// Append-only storage backend for trail events.
///
/// Backends never modify or delete an event once appended. Reads return
/// copies; callers cannot reach into a backend's own sequence.
pub trait TrailStore: Send {
    /// Appends one event. On error the store is left unchanged.
    fn append(&mut self, event: TrailEvent) -> Result<(), StoreError>;

    /// Every event in insertion order.
    fn read_all(&self) -> Vec<TrailEvent>;

    /// Filtered, cursor-paginated view over the stored events.
    fn query(&self, filters: &QueryFilters) -> QueryResult;

    /// Hash of the most recent event, or the genesis hash when empty.
    fn last_hash(&self) -> String;

    /// Number of stored events.
    fn count(&self) -> usize;

    /// Durability barrier. Backends without buffered state do nothing.
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Zero-based indices of lines skipped while recovering persisted state.
    fn corrupt_lines(&self) -> &[usize] {
        &[]
    }

    /// Backend name, for logs.
    fn name(&self) -> &'static str;
}
