//! Logging init: file under the XDG state dir, or stderr when that fails.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "skuview.log";

/// Filter used when `RUST_LOG` is unset and logs go to the file.
const FILE_FILTER: &str = "info,skuview_core=debug,skuview_cli=debug";

/// Path of the log file: `$XDG_STATE_HOME/skuview/skuview.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("skuview")?;
    // The prefixed state home already ends in `skuview/`.
    Ok(xdg_dirs.get_state_home().join(LOG_FILE))
}

/// Initialize structured logging to the log file.
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILE_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("skuview logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Quiet by default so it doesn't mix with report output.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
