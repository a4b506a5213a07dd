//! Error taxonomy for metadata resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of a single resolution attempt.
///
/// Everything surfaces to the immediate caller; nothing is retried or
/// silently defaulted. Retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// URI scheme outside the supported set. Raised before any I/O.
    #[error("unsupported scheme: '{0}'")]
    UnsupportedScheme(String),

    /// The templated artifact URL did not parse. Configuration error.
    #[error("invalid artifact URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network or connection failure while fetching.
    #[error("transport failure for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    /// The archive was scanned to its end without matching the entry.
    #[error("archive entry not found: '{0}'")]
    EntryNotFound(String),

    /// No embedded resource is registered at the requested path.
    #[error("no embedded resource at '{0}'")]
    ResourceNotFound(String),

    /// Local file missing or unreadable.
    #[error("not readable: {path}: {source}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The downloaded body is not a well-formed zip archive.
    #[error("archive read failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Read failure partway through a stream (e.g. truncated gzip data).
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// The resolved bytes are not valid JSON.
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend invoked through an entry point it does not implement.
    #[error("resolver does not support externally supplied input")]
    UnsupportedOperation,
}
