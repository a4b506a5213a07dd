//! Embedded resource lookup for `classpath:` URIs.
//!
//! Resources are compiled into the crate and addressed by slash-separated
//! path, laid out the same way the remote archives are.

/// Registered resources. Lookup is by exact path, no pattern matching.
const RESOURCES: &[(&str, &[u8])] = &[
    (
        "org/icgc/dcc/resources/Dictionary.json",
        include_bytes!("../resources/org/icgc/dcc/resources/Dictionary.json"),
    ),
    (
        "org/icgc/dcc/resources/CodeList.json",
        include_bytes!("../resources/org/icgc/dcc/resources/CodeList.json"),
    ),
];

/// Returns the bytes registered at `path`. One leading `/` is tolerated
/// because the scheme-specific part of a `classpath:` URI starts with one.
pub fn lookup(path: &str) -> Option<&'static [u8]> {
    let key = path.strip_prefix('/').unwrap_or(path);
    RESOURCES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, bytes)| *bytes)
}
