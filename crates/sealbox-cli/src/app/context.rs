//! Application context for the Sealbox CLI.
//!
//! Bundles CLI arguments with the loaded config file so handlers take a
//! single parameter.

use std::io::IsTerminal;

use secrecy::SecretString;

use sealbox_core::crypto::KdfParams;
use sealbox_core::storage::DisabledBlobStore;
use sealbox_core::{BlobStore, Sealbox};

use crate::cli::Cli;
use crate::config::SealboxConfig;

use super::password::read_password;
use super::resolver::open_store;

/// Service handle used by every command.
pub type Service = Sealbox<Box<dyn BlobStore>>;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: SealboxConfig,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli, config: SealboxConfig) -> Self {
        Self { cli, config }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn json(&self) -> bool {
        self.cli.json
    }

    /// True when prompts may be shown.
    pub fn interactive(&self) -> bool {
        std::io::stdin().is_terminal() && !self.cli.no_input
    }

    pub fn kdf(&self) -> anyhow::Result<KdfParams> {
        Ok(KdfParams::new(self.config.kdf.iterations)?)
    }

    /// Service backed by the configured store.
    pub fn sealbox(&self) -> anyhow::Result<Service> {
        let store = open_store(self.cli, &self.config)?;
        Ok(Sealbox::new(store, self.kdf()?))
    }

    /// Service for pure encrypt/decrypt; never touches the database.
    pub fn detached(&self) -> anyhow::Result<Service> {
        Ok(Sealbox::new(Box::new(DisabledBlobStore), self.kdf()?))
    }

    /// Password from `SEALBOX_PASSWORD` or the terminal.
    pub fn password(&self, confirm: bool) -> anyhow::Result<SecretString> {
        read_password(self.interactive(), confirm)
    }
}
