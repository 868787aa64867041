use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::loader::MAX_FILE_LOAD_SIZE;

/// Handling of a filename suffix that looks like a range but does not parse
/// (e.g. `data.bin!1-2-3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSuffixPolicy {
    /// Treat the suffix as part of the filename.
    #[default]
    Ignore,
    /// Refuse to load the file.
    Reject,
}

/// Global configuration loaded from `~/.config/filearg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileargConfig {
    /// Largest content a single load may produce, in bytes.
    #[serde(default = "default_max_load_size")]
    pub max_load_size: usize,
    /// Count CRLF as one character when positioning string-mode loads.
    #[serde(default = "default_text_mode_seek")]
    pub text_mode_seek: bool,
    /// Policy for malformed range suffixes: "ignore" (default) or "reject".
    #[serde(default)]
    pub range_suffix: RangeSuffixPolicy,
    /// Protocols allowed before a protocol spec is applied. None = every known protocol.
    #[serde(default)]
    pub default_protocols: Option<Vec<String>>,
}

fn default_max_load_size() -> usize {
    MAX_FILE_LOAD_SIZE
}

fn default_text_mode_seek() -> bool {
    true
}

impl Default for FileargConfig {
    fn default() -> Self {
        Self {
            max_load_size: default_max_load_size(),
            text_mode_seek: default_text_mode_seek(),
            range_suffix: RangeSuffixPolicy::default(),
            default_protocols: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filearg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FileargConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FileargConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FileargConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadOptions;

    #[test]
    fn default_config_values() {
        let cfg = FileargConfig::default();
        assert_eq!(cfg.max_load_size, 1024 * 1024 * 1024);
        assert!(cfg.text_mode_seek);
        assert_eq!(cfg.range_suffix, RangeSuffixPolicy::Ignore);
        assert!(cfg.default_protocols.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FileargConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FileargConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.max_load_size, cfg.max_load_size);
        assert_eq!(parsed.text_mode_seek, cfg.text_mode_seek);
        assert_eq!(parsed.range_suffix, cfg.range_suffix);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: FileargConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.max_load_size, MAX_FILE_LOAD_SIZE);
        assert!(cfg.text_mode_seek);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            max_load_size = 65536
            text_mode_seek = false
            range_suffix = "reject"
            default_protocols = ["http", "https"]
        "#;
        let cfg: FileargConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_load_size, 65536);
        assert!(!cfg.text_mode_seek);
        assert_eq!(cfg.range_suffix, RangeSuffixPolicy::Reject);
        assert_eq!(
            cfg.default_protocols.as_deref(),
            Some(&["http".to_string(), "https".to_string()][..])
        );

        let opts = LoadOptions::from(&cfg);
        assert_eq!(opts.max_size, 65536);
        assert!(!opts.text_mode_seek);
        assert_eq!(opts.range_suffix, RangeSuffixPolicy::Reject);
    }
}
