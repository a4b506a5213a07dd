use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::artifactory::{DEFAULT_ARTIFACT_VERSION, DEFAULT_BASE_URL};

fn default_archive_timeout_secs() -> u64 {
    30 * 60
}

/// Global configuration loaded from `~/.config/dmr/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmrConfig {
    /// Repository root the versioned artifacts are downloaded from.
    pub base_repository_url: String,
    /// Artifact version used when a resolution does not name one.
    pub default_artifact_version: String,
    /// Transfer timeout for archive downloads, in seconds. Mirrors on
    /// shared CI infrastructure can take minutes to start serving a jar.
    #[serde(default = "default_archive_timeout_secs")]
    pub archive_timeout_secs: u64,
    /// Optional local dictionary file for the direct-file backend.
    #[serde(default)]
    pub dictionary_file: Option<PathBuf>,
}

impl Default for DmrConfig {
    fn default() -> Self {
        Self {
            base_repository_url: DEFAULT_BASE_URL.to_string(),
            default_artifact_version: DEFAULT_ARTIFACT_VERSION.to_string(),
            archive_timeout_secs: default_archive_timeout_secs(),
            dictionary_file: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dmr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DmrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DmrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DmrConfig = toml::from_str(&data)?;
    Ok(cfg)
}
