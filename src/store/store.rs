//! The record store
//!
//! In-memory fingerprint index over the durable record log. The index is
//! rebuilt from the log at open; every mutation is appended (and fsynced)
//! before it becomes visible in the index.
//!
//! Uniqueness is enforced here, not by callers: `insert` performs the
//! presence check and the insert under one write lock, so concurrent
//! identical writes cannot both succeed. `exists` remains available as a
//! cheap pre-check but is never required for correctness.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, RwLock};

use crate::analysis::fingerprint;
use crate::query::PredicateSet;

use super::errors::{StoreError, StoreResult};
use super::log::{replay, LogEntry, LogWriter};
use super::record::StringRecord;

/// Durable, fingerprint-keyed store of string records.
pub struct RecordStore {
    index: RwLock<HashMap<String, StringRecord>>,
    log: Mutex<LogWriter>,
}

impl RecordStore {
    /// Opens the store at `data_dir`, replaying the record log into the
    /// in-memory index.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let mut index = HashMap::new();
        for entry in replay(data_dir)? {
            match entry {
                LogEntry::Insert(record) => {
                    index.insert(record.fingerprint.clone(), record);
                }
                LogEntry::Delete(fp) => {
                    index.remove(&fp);
                }
            }
        }

        let log = LogWriter::open(data_dir)?;

        Ok(Self {
            index: RwLock::new(index),
            log: Mutex::new(log),
        })
    }

    /// Returns true iff a record for `value` is present.
    pub fn exists(&self, value: &str) -> StoreResult<bool> {
        let fp = fingerprint(value);
        let index = self.read_index()?;
        Ok(index.contains_key(&fp))
    }

    /// Inserts `record` if its fingerprint is absent.
    ///
    /// The check and the insert happen under one write lock; the log entry
    /// is durable before the record becomes visible.
    pub fn insert(&self, record: StringRecord) -> StoreResult<()> {
        let mut index = self.write_index()?;
        if index.contains_key(&record.fingerprint) {
            return Err(StoreError::Conflict);
        }

        self.append(LogEntry::Insert(record.clone()))?;
        index.insert(record.fingerprint.clone(), record);
        Ok(())
    }

    /// Point lookup by value.
    pub fn get_by_value(&self, value: &str) -> StoreResult<StringRecord> {
        let fp = fingerprint(value);
        let index = self.read_index()?;
        index.get(&fp).cloned().ok_or(StoreError::NotFound)
    }

    /// Deletes the record for `value`, appending a tombstone first.
    pub fn delete_by_value(&self, value: &str) -> StoreResult<()> {
        let fp = fingerprint(value);
        let mut index = self.write_index()?;
        if !index.contains_key(&fp) {
            return Err(StoreError::NotFound);
        }

        self.append(LogEntry::Delete(fp.clone()))?;
        index.remove(&fp);
        Ok(())
    }

    /// Returns every record satisfying all predicates in `set`. An empty
    /// set matches everything. Result order is unspecified.
    pub fn find(&self, set: &PredicateSet) -> StoreResult<Vec<StringRecord>> {
        let index = self.read_index()?;
        Ok(index
            .values()
            .filter(|record| set.matches(record))
            .cloned()
            .collect())
    }

    /// Number of live records.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_index()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn append(&self, entry: LogEntry) -> StoreResult<()> {
        let mut log = self
            .log
            .lock()
            .map_err(|_| StoreError::unavailable("record log lock poisoned"))?;
        log.append(&entry)
    }

    fn read_index(
        &self,
    ) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<String, StringRecord>>> {
        self.index
            .read()
            .map_err(|_| StoreError::unavailable("index lock poisoned"))
    }

    fn write_index(
        &self,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<String, StringRecord>>> {
        self.index
            .write()
            .map_err(|_| StoreError::unavailable("index lock poisoned"))
    }
}
