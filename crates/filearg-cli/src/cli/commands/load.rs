//! Load command: read a file argument and emit its content or digest.

use anyhow::{Context, Result};
use filearg_core::config::FileargConfig;
use filearg_core::digest;
use filearg_core::{LoadMode, LoadOptions, Loader};
use std::io::Write;
use std::path::Path;

pub fn run_load(
    cfg: &FileargConfig,
    file: &str,
    strip: bool,
    show_digest: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mode = if strip {
        LoadMode::StripTerminators
    } else {
        LoadMode::PreserveBytes
    };
    let loader = Loader::new(LoadOptions::from(cfg));
    let data = loader
        .load_file(file, mode)
        .with_context(|| format!("loading {}", file))?;
    tracing::info!(file, bytes = data.len(), ?mode, "loaded file argument");

    if show_digest {
        println!("{}  {}", digest::sha256_hex(&data), file);
        return Ok(());
    }

    match output {
        Some(path) => {
            std::fs::write(path, &data).with_context(|| format!("write {}", path.display()))?
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(&data)?;
            out.flush()?;
        }
    }
    Ok(())
}
