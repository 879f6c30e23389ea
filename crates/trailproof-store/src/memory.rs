//! Volatile in-memory backend.

use crate::error::StoreError;
use crate::filter::{paginate, QueryFilters, QueryResult};
use crate::traits::TrailStore;
use trailproof_core::{TrailEvent, GENESIS_HASH};

/// Keeps the trail in a `Vec`. Events are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<TrailEvent>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrailStore for MemoryStore {
    fn append(&mut self, event: TrailEvent) -> Result<(), StoreError> {
        self.events.push(event);
        Ok(())
    }

    fn read_all(&self) -> Vec<TrailEvent> {
        self.events.clone()
    }

    fn query(&self, filters: &QueryFilters) -> QueryResult {
        paginate(&self.events, filters)
    }

    fn last_hash(&self) -> String {
        self.events
            .last()
            .map(|e| e.hash().to_string())
            .unwrap_or_else(|| GENESIS_HASH.to_string())
    }

    fn count(&self) -> usize {
        self.events.len()
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
