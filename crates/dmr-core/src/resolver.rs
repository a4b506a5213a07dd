//! Resolver capability shared by all metadata backends.
//!
//! Downstream generators depend only on this trait and never branch on the
//! concrete backend behind it (local file, versioned archive, REST).

use serde_json::Value;

use crate::error::ResolveError;

/// A resolved metadata document: the parsed JSON tree, owned by the caller.
pub type Document = Value;

/// One stateless fetch-and-parse strategy for a metadata document.
///
/// Implementations hold only construction-time configuration (file path,
/// base URL, default version). Every call is independent: nothing is
/// cached and no state is shared across calls.
pub trait Resolver {
    /// Performs one resolution attempt and returns the parsed document.
    fn get(&self) -> Result<Document, ResolveError>;

    /// Resolves with an optional caller-supplied hint. Archive-backed
    /// resolvers take an explicit artifact version here; fetch-only
    /// backends return `UnsupportedOperation` rather than ignoring it.
    fn apply(&self, hint: Option<&str>) -> Result<Document, ResolveError>;
}
