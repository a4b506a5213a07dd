//! Logging init: env-filtered tracing to stderr, or to a file under the
//! XDG state dir for long-running resolutions.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,dmr_core=debug"))
}

/// Initialize logging to stderr.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Initialize logging to `~/.local/state/dmr/dmr.log`.
/// Returns Err when the state dir is unwritable so the caller can fall
/// back to `init_stderr`.
pub fn init_file() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dmr")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("dmr.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("dmr logging initialized at {}", log_file_path.display());

    Ok(())
}
