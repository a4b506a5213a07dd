//! Scheme-dispatched stream opening.
//!
//! Turns a `ResolvableUri` into a readable byte stream, hiding the
//! transport behind it. Web URIs are downloaded (fragment stripped) and
//! the fragment-named entry is pulled out of the body archive; classpath
//! URIs come straight from the embedded registry.

use std::io::{Cursor, Read};

use crate::archive;
use crate::classpath;
use crate::error::ResolveError;
use crate::fetch;
use crate::uri::ResolvableUri;

/// Opens `uri` and returns a reader positioned at the start of the
/// resolved content. Every transport handle is released before returning.
pub fn open(uri: &ResolvableUri) -> Result<Box<dyn Read>, ResolveError> {
    match uri {
        ResolvableUri::Web { url, entry } => {
            let body = fetch::fetch_bytes(url.as_str(), fetch::DEFAULT_FETCH_TIMEOUT)?;
            let name = entry.as_deref().unwrap_or_default();
            let bytes = archive::read_entry(&body, name)?;
            Ok(Box::new(Cursor::new(bytes)))
        }
        ResolvableUri::Classpath { path } => {
            let bytes = classpath::lookup(path)
                .ok_or_else(|| ResolveError::ResourceNotFound(path.clone()))?;
            Ok(Box::new(Cursor::new(bytes)))
        }
    }
}
