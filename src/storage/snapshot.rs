//! Snapshot file persistence
//!
//! File layout:
//!
//! ```text
//! clinicdb-snapshot v1 crc32=<8 hex digits>\n
//! <tables as JSON>
//! ```
//!
//! The CRC32 (IEEE) covers the JSON body. Every write goes to a sibling
//! `.tmp` file, is fsynced, then renamed over the snapshot so a crash leaves
//! either the old or the new snapshot intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crc32fast::Hasher;

use super::errors::{StoreError, StoreResult};
use super::tables::Tables;

const MAGIC: &str = "clinicdb-snapshot";
const VERSION: &str = "v1";

fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// A snapshot file on disk
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the tables, or empty tables when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// `Corrupt` on a bad header, checksum mismatch or undecodable body;
    /// `Io` when the file exists but cannot be read.
    pub fn load(&self) -> StoreResult<Tables> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Tables::new()),
            Err(e) => return Err(StoreError::io("Failed to read snapshot", e)),
        };

        let newline = bytes
            .iter()
            .position(|b| *b == b'\n')
            .ok_or_else(|| StoreError::Corrupt("missing snapshot header".into()))?;
        let header = std::str::from_utf8(&bytes[..newline])
            .map_err(|_| StoreError::Corrupt("snapshot header is not UTF-8".into()))?;
        let body = &bytes[newline + 1..];

        let expected = parse_header(header)?;
        let actual = compute_checksum(body);
        if actual != expected {
            return Err(StoreError::Corrupt(format!(
                "checksum mismatch: expected {:08x}, found {:08x}",
                expected, actual
            )));
        }

        serde_json::from_slice(body)
            .map_err(|e| StoreError::Corrupt(format!("invalid snapshot body: {}", e)))
    }

    /// Writes the tables and fsyncs before replacing the previous snapshot.
    pub fn persist(&self, tables: &Tables) -> StoreResult<()> {
        let body = serde_json::to_vec(tables)
            .map_err(|e| StoreError::Io(format!("Failed to encode snapshot: {}", e)))?;
        let header = format!("{} {} crc32={:08x}\n", MAGIC, VERSION, compute_checksum(&body));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::io("Failed to create snapshot directory", e))?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        let mut file = File::create(&tmp_path)
            .map_err(|e| StoreError::io("Failed to create snapshot", e))?;
        file.write_all(header.as_bytes())
            .and_then(|_| file.write_all(&body))
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::io("Failed to write snapshot", e))?;

        fs::rename(&tmp_path, &self.path)
            .map_err(|e| StoreError::io("Failed to replace snapshot", e))
    }
}

fn parse_header(header: &str) -> StoreResult<u32> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(MAGIC), Some(VERSION), Some(crc), None) => {
            let hex = crc
                .strip_prefix("crc32=")
                .ok_or_else(|| StoreError::Corrupt(format!("bad checksum field: {}", crc)))?;
            u32::from_str_radix(hex, 16)
                .map_err(|_| StoreError::Corrupt(format!("bad checksum value: {}", hex)))
        }
        _ => Err(StoreError::Corrupt(format!(
            "unrecognized snapshot header: {}",
            header
        ))),
    }
}
