use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::filename::{Substitution, Substitutions};

/// Global configuration loaded from `~/.config/fnorm/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnormConfig {
    /// Default maximum basename length in bytes (None = unlimited).
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Treat names without a known extension or with an empty basename as errors.
    #[serde(default)]
    pub require_valid: bool,
    /// Ordered literal replacements; when empty the built-in umlaut table is used.
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
    /// Extra `extension = "mime/type"` mappings layered over the standard registry.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

impl FnormConfig {
    /// Effective substitution table for normalizing names.
    pub fn substitutions(&self) -> Substitutions {
        if self.substitutions.is_empty() {
            Substitutions::default_table()
        } else {
            Substitutions::from(self.substitutions.clone())
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fnorm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FnormConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FnormConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<FnormConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FnormConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
