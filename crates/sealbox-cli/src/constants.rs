//! Constants used throughout the CLI.

/// Environment variables read by the CLI.
pub mod env_vars {
    /// Password for encrypt/decrypt, skips the prompt.
    pub const PASSWORD: &str = "SEALBOX_PASSWORD";

    /// Config file location override.
    pub const CONFIG: &str = "SEALBOX_CONFIG";

    /// Tracing filter directive.
    pub const LOG: &str = "SEALBOX_LOG";
}

/// Default tracing filter when neither env nor config set one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Stored blob not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Decryption failed (wrong password or corrupted blob).
    pub const DECRYPTION_FAILED: i32 = 5;

    /// Blob storage disabled or unreachable.
    pub const STORAGE_UNAVAILABLE: i32 = 6;
}
