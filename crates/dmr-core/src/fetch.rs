//! Blocking HTTP fetch of a URL body into memory.
//!
//! Uses the curl crate (libcurl) with a short connect timeout and a very
//! long transfer timeout: the artifact mirrors sit on shared CI
//! infrastructure that can take minutes to start serving a jar.

use std::time::Duration;

use crate::error::ResolveError;

/// Transfer timeout applied when the caller does not override it.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30 * 60);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads `url` with a GET, following redirects, and returns the body.
///
/// Non-2xx responses are an error. The body is buffered fully, so no
/// connection handle outlives this call.
pub fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, ResolveError> {
    let transport = |source: curl::Error| ResolveError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.connect_timeout(CONNECT_TIMEOUT).map_err(transport)?;
    easy.timeout(timeout).map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        tracing::debug!(url, code, "fetch rejected by server");
        return Err(ResolveError::Http {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}
