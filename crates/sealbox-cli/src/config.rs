use std::path::{Path, PathBuf};

use serde::Deserialize;

use sealbox_core::crypto::DEFAULT_ITERATIONS;

/// Lowest iteration count a deployment may configure.
pub const MIN_ITERATIONS: u32 = DEFAULT_ITERATIONS;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SealboxConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub kdf: KdfSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub path: Option<String>,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KdfSection {
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for KdfSection {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    pub filter: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl SealboxConfig {
    /// Reject settings that would make stored blobs unreadable or weak.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.kdf.iterations < MIN_ITERATIONS {
            return Err(anyhow::anyhow!(
                "kdf.iterations must be at least {} (got {})",
                MIN_ITERATIONS,
                self.kdf.iterations
            ));
        }
        Ok(())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_db_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("sealbox.db"))
}

/// Read and validate a config file.
pub fn read_config(path: &Path) -> anyhow::Result<SealboxConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let config: SealboxConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
    config.validate()?;
    Ok(config)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealbox"));
        }
    }
    Ok(home_dir()?.join(".config").join("sealbox"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealbox"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("sealbox"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
