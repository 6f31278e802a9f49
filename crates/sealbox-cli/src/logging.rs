//! Tracing setup. Logs go to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use crate::constants::{env_vars, DEFAULT_LOG_FILTER};

/// Pick the filter directive: `SEALBOX_LOG`, then config, then the default.
pub fn filter_directive(env_value: Option<String>, config_filter: Option<&str>) -> String {
    env_value
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config_filter.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn init_tracing(config_filter: Option<&str>) {
    let directive = filter_directive(std::env::var(env_vars::LOG).ok(), config_filter);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
