//! Logging init for the `filearg` binary.
//!
//! Events go to an append-only file under the XDG state directory. When that
//! file cannot be opened the binary falls back to stderr, so a read-only home
//! never stops a load. The level filter comes from `FILEARG_LOG` (same syntax
//! as `RUST_LOG`), then `RUST_LOG`, then [`DEFAULT_FILTER`].

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Loader and seek events at debug, everything else at info.
pub const DEFAULT_FILTER: &str = "info,filearg_core=debug,filearg=debug";

/// Environment variable consulted before `RUST_LOG`.
pub const FILTER_ENV: &str = "FILEARG_LOG";

/// Where [`init_logging`] sent the log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// `~/.local/state/filearg/filearg.log` (or the `XDG_STATE_HOME` equivalent).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filearg")?;
    Ok(xdg_dirs.get_state_home().join("filearg.log"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Installs a file subscriber; returns Err (nothing installed) if the log file
/// is unusable so the caller can try [`init_logging_stderr`].
pub fn init_logging() -> Result<LogDestination> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::info!(path = %path.display(), "filearg logging initialized");
    Ok(LogDestination::File(path))
}

/// Stderr-only subscriber. A second global subscriber is silently ignored.
pub fn init_logging_stderr() -> LogDestination {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
    LogDestination::Stderr
}

/// File logging if possible, otherwise stderr.
pub fn init() -> LogDestination {
    init_logging().unwrap_or_else(|_| init_logging_stderr())
}
