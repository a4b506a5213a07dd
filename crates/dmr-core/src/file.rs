//! Direct-file dictionary resolution.
//!
//! Reads a dictionary from a local path, independent of the network
//! backends. The document is a single line of JSON, stored either plain or
//! gzip-compressed.

use std::fs;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::ResolveError;
use crate::resolver::{Document, Resolver};

/// Gzip member header magic.
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Resolves a dictionary from a local file.
///
/// Fetch-only: this backend has no use for an externally supplied hint.
#[derive(Debug, Clone)]
pub struct FileDictionaryResolver {
    path: PathBuf,
}

impl FileDictionaryResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Resolver for FileDictionaryResolver {
    fn get(&self) -> Result<Document, ResolveError> {
        let line = first_line(&self.path)?;
        Ok(serde_json::from_str(&line)?)
    }

    fn apply(&self, _hint: Option<&str>) -> Result<Document, ResolveError> {
        Err(ResolveError::UnsupportedOperation)
    }
}

/// First line of the file at `path`, transparently gunzipping when the
/// gzip magic is present. Missing or unreadable paths fail fast with the
/// path in the error.
fn first_line(path: &Path) -> Result<String, ResolveError> {
    let not_readable = |source: io::Error| ResolveError::NotReadable {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(not_readable)?;
    if !metadata.is_file() {
        return Err(not_readable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    let file = fs::File::open(path).map_err(not_readable)?;
    let mut reader = BufReader::new(file);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    let mut line = String::new();
    if gzipped {
        BufReader::new(GzDecoder::new(reader)).read_line(&mut line)?;
    } else {
        reader.read_line(&mut line)?;
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    const DICTIONARY_LINE: &str = r#"{"version":"1.0","files":[{"name":"donor"}]}"#;

    fn write_plain(dir: &TempDir, name: &str, line: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("{}\n", line)).unwrap();
        path
    }

    fn write_gzipped(dir: &TempDir, name: &str, line: &str) -> PathBuf {
        let path = dir.path().join(name);
        let file = fs::File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(line.as_bytes()).unwrap();
        encoder.write_all(b"\n").unwrap();
        encoder.finish().unwrap();
        path
    }

    #[test]
    fn plain_file_resolves() {
        let dir = TempDir::new().unwrap();
        let path = write_plain(&dir, "dict.json", DICTIONARY_LINE);
        let dictionary = FileDictionaryResolver::new(path).get().unwrap();
        assert_eq!(dictionary["version"], "1.0");
    }

    #[test]
    fn gzipped_fixture_resolves() {
        let dir = TempDir::new().unwrap();
        let path = write_gzipped(&dir, "dict.json.gz", r#"{"version":"1.0"}"#);
        let dictionary = FileDictionaryResolver::new(path).get().unwrap();
        assert_eq!(dictionary["version"], "1.0");
    }

    #[test]
    fn compression_is_transparent() {
        let dir = TempDir::new().unwrap();
        let plain = write_plain(&dir, "dict.json", DICTIONARY_LINE);
        let gzipped = write_gzipped(&dir, "dict.json.gz", DICTIONARY_LINE);
        let from_plain = FileDictionaryResolver::new(plain).get().unwrap();
        let from_gzip = FileDictionaryResolver::new(gzipped).get().unwrap();
        assert_eq!(from_plain, from_gzip);
    }

    #[test]
    fn only_the_first_line_is_the_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.json");
        fs::write(&path, format!("{}\nnot json at all\n", DICTIONARY_LINE)).unwrap();
        let dictionary = FileDictionaryResolver::new(path).get().unwrap();
        assert_eq!(dictionary["version"], "1.0");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        match FileDictionaryResolver::new(&path).get() {
            Err(ResolveError::NotReadable { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected NotReadable, got {:?}", other),
        }
    }

    #[test]
    fn directory_is_not_readable() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            FileDictionaryResolver::new(dir.path()).get(),
            Err(ResolveError::NotReadable { .. })
        ));
    }

    #[test]
    fn non_json_line_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_plain(&dir, "dict.json", "version: 1.0");
        assert!(matches!(
            FileDictionaryResolver::new(path).get(),
            Err(ResolveError::Parse(_))
        ));
    }

    #[test]
    fn supplied_input_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = write_plain(&dir, "dict.json", DICTIONARY_LINE);
        assert!(matches!(
            FileDictionaryResolver::new(path).apply(Some("{}")),
            Err(ResolveError::UnsupportedOperation)
        ));
    }
}
