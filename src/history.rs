//! Bounded history of recent flight plans
//!
//! Newest-first, fixed capacity. Inserting into a full store evicts the
//! oldest record; nothing else ever removes one.

use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::types::CanonicalRecord;

/// Number of records kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 20;

/// Thread-safe newest-first ring of canonical records
pub struct HistoryStore {
    capacity: usize,
    records: RwLock<VecDeque<CanonicalRecord>>,
}

impl HistoryStore {
    /// Create an empty store holding [`DEFAULT_CAPACITY`] records
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store. A capacity of zero is raised to one.
    ///
    /// Only up to [`DEFAULT_CAPACITY`] slots are reserved up front; larger
    /// stores grow as records arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            records: RwLock::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY) + 1)),
        }
    }

    /// Put a record at the front, dropping the oldest ones past capacity
    pub fn insert(&self, record: CanonicalRecord) {
        let mut records = self.records.write();
        records.push_front(record);
        records.truncate(self.capacity);
    }

    /// Copy of the current records, newest first
    pub fn snapshot(&self) -> Vec<CanonicalRecord> {
        self.records.read().iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.records.read().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
