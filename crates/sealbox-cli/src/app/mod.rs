//! Application-level utilities for the Sealbox CLI.
//!
//! This module provides:
//! - Config and database path resolution
//! - Store selection (SQLite or disabled)
//! - Password sourcing from env or prompt

mod context;
mod password;
mod resolver;

pub use context::AppContext;
pub use resolver::load_config;
