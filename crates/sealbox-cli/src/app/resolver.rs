use std::path::PathBuf;

use sealbox_core::storage::{DisabledBlobStore, SqliteBlobStore};
use sealbox_core::{BlobStore, SealboxError};

use crate::cli::Cli;
use crate::config::{default_config_path, default_db_path, read_config, SealboxConfig};
use crate::constants::env_vars;
use crate::errors::CliError;

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env_vars::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when none exists.
pub fn load_config() -> anyhow::Result<SealboxConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        return Ok(SealboxConfig::default());
    }
    read_config(&path)
}

/// `--no-db` wins; an explicit `--db` re-enables a store the file disabled.
pub fn storage_enabled(cli: &Cli, config: &SealboxConfig) -> bool {
    if cli.no_db {
        return false;
    }
    cli.db.is_some() || config.storage.enabled
}

pub fn resolve_db_path(cli: &Cli, config: &SealboxConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_deref() {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.storage.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_db_path()
}

pub fn open_store(cli: &Cli, config: &SealboxConfig) -> anyhow::Result<Box<dyn BlobStore>> {
    if !storage_enabled(cli, config) {
        tracing::debug!("blob storage disabled");
        return Ok(Box::new(DisabledBlobStore));
    }

    let path = resolve_db_path(cli, config)?;
    tracing::debug!(path = %path.display(), "opening blob store");
    match SqliteBlobStore::open(&path) {
        Ok(store) => Ok(Box::new(store)),
        Err(SealboxError::StorageUnavailable(reason)) => Err(CliError::storage_unavailable(
            format!("Storage unavailable at {}: {}", path.display(), reason),
            "Hint: pass --db PATH (or set SEALBOX_DB) to a writable location.",
        )
        .into()),
        Err(err) => Err(err.into()),
    }
}
