//! Bounded in-memory sink
//!
//! Keeps the most recent records in a ring buffer so they can be inspected
//! after the fact, mostly from tests.

use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::LogError;
use super::record::LogRecord;
use super::sink::LogSink;

/// Capacity used by `MemorySink::default()`
pub const DEFAULT_CAPACITY: usize = 100;

/// What a full memory sink does with a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Evict the oldest record to make room
    #[default]
    EvictOldest,
    /// Keep what is stored and drop the new record
    DropNewest,
}

/// Ring buffer of the last `capacity` records
///
/// When full, each new record evicts exactly one record, the oldest, unless
/// the sink was built with `OverflowPolicy::DropNewest`.
#[derive(Debug)]
pub struct MemorySink {
    records: RwLock<VecDeque<LogRecord>>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl MemorySink {
    /// Create a sink that retains at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, OverflowPolicy::EvictOldest)
    }

    /// Create a sink with an explicit overflow policy
    pub fn with_policy(capacity: usize, policy: OverflowPolicy) -> Self {
        // The deque grows on demand; capacity can be far larger than memory
        Self {
            records: RwLock::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
            policy,
        }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    // A panic inside another holder cannot leave the deque half-updated,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<LogRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<LogRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of records currently held
    pub fn size(&self) -> usize {
        self.read().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.size() == self.capacity
    }

    /// Get a copy of the record at `index`, where 0 is the oldest retained
    pub fn get(&self, index: usize) -> Result<LogRecord, LogError> {
        let records = self.read();
        records.get(index).cloned().ok_or(LogError::OutOfRange {
            index,
            size: records.len(),
        })
    }

    /// The most recently received record
    pub fn last(&self) -> Option<LogRecord> {
        self.read().back().cloned()
    }

    /// Snapshot of all retained records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.read().iter().cloned().collect()
    }

    /// Drop every retained record, returning how many were removed
    pub fn clear(&self) -> usize {
        let mut records = self.write();
        let removed = records.len();
        records.clear();
        removed
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LogSink for MemorySink {
    fn receive(&self, record: &LogRecord) {
        if self.capacity == 0 {
            return;
        }

        let mut records = self.write();
        if records.len() >= self.capacity {
            match self.policy {
                OverflowPolicy::EvictOldest => {
                    records.pop_front();
                }
                OverflowPolicy::DropNewest => return,
            }
        }
        records.push_back(record.clone());
    }
}
