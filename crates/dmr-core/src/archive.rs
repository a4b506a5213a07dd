//! Archive entry extraction.
//!
//! The remote artifacts are zip-format containers. Entries are matched by
//! exact name, scanning in whatever order the container yields them; no
//! index is built.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::ResolveError;

/// Scans `body` for the entry named `entry_name` and returns its bytes.
///
/// A scan that runs dry reports `EntryNotFound` with the requested name.
pub fn read_entry(body: &[u8], entry_name: &str) -> Result<Vec<u8>, ResolveError> {
    let mut archive = ZipArchive::new(Cursor::new(body))?;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.name() == entry_name {
            let mut bytes = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut bytes)?;
            return Ok(bytes);
        }
    }
    Err(ResolveError::EntryNotFound(entry_name.to_string()))
}
