//! Versioned artifact store resolution.
//!
//! Published dictionary and code-list documents live inside versioned
//! `dcc-resources` jars under a fixed repository layout. Resolution builds
//! the download URL for a version, fetches the jar, scans it for the
//! requested document and deserializes it.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::archive;
use crate::config::DmrConfig;
use crate::error::ResolveError;
use crate::fetch;
use crate::resolver::{Document, Resolver};

/// Artifact version used when the caller supplies none.
pub const DEFAULT_ARTIFACT_VERSION: &str = "0.10a";

/// Repository root the published artifacts are mirrored under.
pub const DEFAULT_BASE_URL: &str = "http://seqwaremaven.oicr.on.ca/artifactory";

/// Every resolvable archive stores its documents under this entry prefix.
const ENTRY_PREFIX: &str = "org/icgc/dcc/resources/";

const DICTIONARY_FILE: &str = "Dictionary.json";
const CODE_LISTS_FILE: &str = "CodeList.json";

/// A version-addressed remote artifact repository.
///
/// Stateless across calls: every read fetches and parses from scratch.
#[derive(Debug, Clone)]
pub struct ArtifactoryStore {
    base_url: String,
    default_version: String,
    timeout: Duration,
}

impl ArtifactoryStore {
    pub fn new(base_url: impl Into<String>, default_version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_version: default_version.into(),
            timeout: fetch::DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn from_config(config: &DmrConfig) -> Self {
        Self::new(
            &config.base_repository_url,
            &config.default_artifact_version,
        )
        .with_timeout(Duration::from_secs(config.archive_timeout_secs))
    }

    /// Overrides the transfer timeout (tests use a short one).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Download URL for `version`, or for the configured default when `None`.
    ///
    /// A URL that does not parse is a configuration error, not a transport
    /// failure.
    pub fn artifact_url(&self, version: Option<&str>) -> Result<Url, ResolveError> {
        let version = version.unwrap_or(&self.default_version);
        let raw = format!(
            "{}/simple/dcc-dependencies/org/icgc/dcc/dcc-resources/{version}/dcc-resources-{version}.jar",
            self.base_url
        );
        Ok(Url::parse(&raw)?)
    }

    /// Resolves `file_name` from the default-version archive.
    pub fn read<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, ResolveError> {
        self.read_version(file_name, None)
    }

    /// Resolves `file_name` from the archive for `version`, falling back to
    /// the configured default when `None`.
    pub fn read_version<T: DeserializeOwned>(
        &self,
        file_name: &str,
        version: Option<&str>,
    ) -> Result<T, ResolveError> {
        let url = self.artifact_url(version)?;
        tracing::debug!(url = %url, file_name, "resolving artifact document");
        let body = fetch::fetch_bytes(url.as_str(), self.timeout)?;
        let entry = format!("{ENTRY_PREFIX}{file_name}");
        let bytes = archive::read_entry(&body, &entry)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Default for ArtifactoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_ARTIFACT_VERSION)
    }
}

/// Dictionary document resolver over a versioned artifact store.
#[derive(Debug, Clone, Default)]
pub struct ArtifactoryDictionaryResolver {
    store: ArtifactoryStore,
}

impl ArtifactoryDictionaryResolver {
    pub fn new(store: ArtifactoryStore) -> Self {
        Self { store }
    }
}

impl Resolver for ArtifactoryDictionaryResolver {
    fn get(&self) -> Result<Document, ResolveError> {
        self.store.read(DICTIONARY_FILE)
    }

    /// The hint is an explicit artifact version.
    fn apply(&self, hint: Option<&str>) -> Result<Document, ResolveError> {
        self.store.read_version(DICTIONARY_FILE, hint)
    }
}

/// Code-lists document resolver over a versioned artifact store.
#[derive(Debug, Clone, Default)]
pub struct ArtifactoryCodeListsResolver {
    store: ArtifactoryStore,
}

impl ArtifactoryCodeListsResolver {
    pub fn new(store: ArtifactoryStore) -> Self {
        Self { store }
    }
}

impl Resolver for ArtifactoryCodeListsResolver {
    fn get(&self) -> Result<Document, ResolveError> {
        self.store.read(CODE_LISTS_FILE)
    }

    /// The hint is an explicit artifact version.
    fn apply(&self, hint: Option<&str>) -> Result<Document, ResolveError> {
        self.store.read_version(CODE_LISTS_FILE, hint)
    }
}
