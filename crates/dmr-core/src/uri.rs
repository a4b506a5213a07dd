//! Resolvable URI model and scheme classification.
//!
//! Supported forms: `https://<host>/<path>#<entryFileName>`,
//! `http://...#<entryFileName>`, and `classpath:/<resourcePath>`. Anything
//! else is rejected before any I/O happens.

use url::Url;

use crate::error::ResolveError;

/// A URI classified by the transport that can open it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvableUri {
    /// Web archive URI. The fragment names the entry to extract from the
    /// downloaded archive; the stored URL has the fragment stripped.
    Web { url: Url, entry: Option<String> },
    /// Embedded resource path, as given (leading `/` retained).
    Classpath { path: String },
}

impl ResolvableUri {
    /// Parses and classifies `input`.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let url = Url::parse(input)?;
        match url.scheme() {
            "http" | "https" => {
                let entry = url.fragment().map(str::to_string);
                let mut url = url;
                url.set_fragment(None);
                Ok(ResolvableUri::Web { url, entry })
            }
            "classpath" => Ok(ResolvableUri::Classpath {
                path: url.path().to_string(),
            }),
            other => Err(ResolveError::UnsupportedScheme(other.to_string())),
        }
    }
}
