//! Bounded analysis history
//!
//! The administrative view reads past analyses from a [`HistoryStore`]. The
//! store is owned by the host application and injected into the analyzer; the
//! generator itself never touches it.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use log::debug;

use crate::types::AnalysisRecord;

/// Default number of analyses kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Append-only store of past analyses.
pub trait HistoryStore: Send + Sync {
    /// Append a record, evicting the oldest entries past capacity.
    fn record(&self, record: AnalysisRecord);

    /// Oldest-first copy of the current entries.
    fn snapshot(&self) -> Vec<AnalysisRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;
}

/// In-memory FIFO ring buffer.
#[derive(Debug)]
pub struct BoundedHistory {
    capacity: usize,
    entries: Mutex<VecDeque<AnalysisRecord>>,
}

impl BoundedHistory {
    /// Create a store holding at most `capacity` records (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    fn entries(&self) -> MutexGuard<'_, VecDeque<AnalysisRecord>> {
        // A poisoned lock still holds whole records.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BoundedHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStore for BoundedHistory {
    fn record(&self, record: AnalysisRecord) {
        let mut entries = self.entries();
        entries.push_back(record);
        while entries.len() > self.capacity {
            if let Some(evicted) = entries.pop_front() {
                debug!("evicted history entry {} ({})", evicted.id, evicted.url);
            }
        }
    }

    fn snapshot(&self) -> Vec<AnalysisRecord> {
        self.entries().iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
