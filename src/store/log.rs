//! Append-only record log
//!
//! Durable backing for the record store. Every mutation is one framed
//! entry:
//!
//! ```text
//! +--------------+
//! | Frame Length | (u32 LE, total frame including this field)
//! +--------------+
//! | Operation    | (u8: 1 = insert, 2 = delete)
//! +--------------+
//! | Payload      | (insert: JSON record; delete: fingerprint)
//! +--------------+
//! | Checksum     | (u32 LE, CRC32 over all preceding bytes)
//! +--------------+
//! ```
//!
//! Appends are fsynced before they are acknowledged. Replay is strict: a
//! checksum mismatch or truncated frame halts startup with a corruption
//! error rather than skipping records.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::record::StringRecord;

const OP_INSERT: u8 = 1;
const OP_DELETE: u8 = 2;

// frame length + op + empty payload + checksum
const MIN_FRAME_LEN: usize = 4 + 1 + 4;

/// One logged mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    /// A record was inserted
    Insert(StringRecord),
    /// The record with this fingerprint was deleted
    Delete(String),
}

impl LogEntry {
    /// Serializes the entry into a framed, checksummed byte sequence.
    pub fn encode(&self) -> StoreResult<Vec<u8>> {
        let (op, payload) = match self {
            LogEntry::Insert(record) => {
                let payload = serde_json::to_vec(record)
                    .map_err(|e| StoreError::unavailable(format!("encode record: {}", e)))?;
                (OP_INSERT, payload)
            }
            LogEntry::Delete(fingerprint) => (OP_DELETE, fingerprint.as_bytes().to_vec()),
        };

        let frame_len = (MIN_FRAME_LEN + payload.len()) as u32;

        let mut frame = Vec::with_capacity(frame_len as usize);
        frame.extend_from_slice(&frame_len.to_le_bytes());
        frame.push(op);
        frame.extend_from_slice(&payload);

        let checksum = crc32fast::hash(&frame);
        frame.extend_from_slice(&checksum.to_le_bytes());

        Ok(frame)
    }

    /// Decodes one frame from `data`, verifying the checksum.
    ///
    /// Returns the entry and the number of bytes consumed.
    pub fn decode(data: &[u8]) -> StoreResult<(Self, usize)> {
        if data.len() < MIN_FRAME_LEN {
            return Err(StoreError::corruption("truncated frame header"));
        }

        let frame_len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        if frame_len < MIN_FRAME_LEN {
            return Err(StoreError::corruption(format!(
                "invalid frame length {}",
                frame_len
            )));
        }
        if data.len() < frame_len {
            return Err(StoreError::corruption(format!(
                "truncated frame: expected {} bytes, got {}",
                frame_len,
                data.len()
            )));
        }

        let checksum_offset = frame_len - 4;
        let stored = u32::from_le_bytes([
            data[checksum_offset],
            data[checksum_offset + 1],
            data[checksum_offset + 2],
            data[checksum_offset + 3],
        ]);
        let computed = crc32fast::hash(&data[..checksum_offset]);
        if stored != computed {
            return Err(StoreError::corruption(format!(
                "checksum mismatch: computed {:08x}, stored {:08x}",
                computed, stored
            )));
        }

        let op = data[4];
        let payload = &data[5..checksum_offset];
        let entry = match op {
            OP_INSERT => {
                let record: StringRecord = serde_json::from_slice(payload)
                    .map_err(|e| StoreError::corruption(format!("invalid record payload: {}", e)))?;
                LogEntry::Insert(record)
            }
            OP_DELETE => {
                let fingerprint = String::from_utf8(payload.to_vec())
                    .map_err(|e| StoreError::corruption(format!("invalid fingerprint: {}", e)))?;
                LogEntry::Delete(fingerprint)
            }
            other => {
                return Err(StoreError::corruption(format!(
                    "unknown operation tag {}",
                    other
                )))
            }
        };

        Ok((entry, frame_len))
    }
}

/// Appender for the record log. Holds the file open for the lifetime of
/// the store.
pub struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens or creates `<data_dir>/log/records.log` for appending.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let log_dir = data_dir.join("log");
        if !log_dir.exists() {
            fs::create_dir_all(&log_dir).map_err(|e| {
                StoreError::unavailable(format!(
                    "create log directory {}: {}",
                    log_dir.display(),
                    e
                ))
            })?;
        }

        let path = log_path(data_dir);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                StoreError::unavailable(format!("open record log {}: {}", path.display(), e))
            })?;

        Ok(Self { file })
    }

    /// Appends one entry and fsyncs before returning.
    pub fn append(&mut self, entry: &LogEntry) -> StoreResult<()> {
        let frame = entry.encode()?;
        self.file
            .write_all(&frame)
            .map_err(|e| StoreError::unavailable(format!("append record log: {}", e)))?;
        self.file
            .sync_all()
            .map_err(|e| StoreError::unavailable(format!("sync record log: {}", e)))?;
        Ok(())
    }
}

/// Path of the record log inside a data directory.
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("log").join("records.log")
}

/// Reads every entry from the log at `data_dir`, in append order.
///
/// An absent log file is an empty store, not an error. Any framing or
/// checksum failure is.
pub fn replay(data_dir: &Path) -> StoreResult<Vec<LogEntry>> {
    let path = log_path(data_dir);
    let mut file = match File::open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::unavailable(format!(
                "open record log {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| StoreError::unavailable(format!("read record log: {}", e)))?;

    let mut entries = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let (entry, consumed) = LogEntry::decode(&data[offset..])?;
        entries.push(entry);
        offset += consumed;
    }

    Ok(entries)
}
