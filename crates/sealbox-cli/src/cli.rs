use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use sealbox_core::VERSION;

/// Sealbox - password-based encryption of text, with optional blob storage
#[derive(Parser)]
#[command(name = "sealbox")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the blob database
    #[arg(long, global = true, env = "SEALBOX_DB")]
    pub db: Option<String>,

    /// Disable blob storage (encrypt/decrypt still work)
    #[arg(long, global = true)]
    pub no_db: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Text to encrypt (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Also store the blob
    #[arg(long)]
    pub save: bool,

    #[command(flatten)]
    pub meta: MetadataArgs,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Base64 blob (reads stdin when omitted)
    #[arg(value_name = "BLOB", conflicts_with = "id")]
    pub blob: Option<String>,

    /// Decrypt a stored blob by ID
    #[arg(long)]
    pub id: Option<i64>,
}

/// Arguments for the `save` command
#[derive(Args)]
pub struct SaveArgs {
    /// Base64 blob (reads stdin when omitted)
    #[arg(value_name = "BLOB")]
    pub blob: Option<String>,

    #[command(flatten)]
    pub meta: MetadataArgs,
}

/// Optional metadata stored with a blob
#[derive(Args)]
pub struct MetadataArgs {
    /// Original filename
    #[arg(long)]
    pub filename: Option<String>,

    /// Free-form note
    #[arg(long)]
    pub note: Option<String>,

    /// Owner identifier
    #[arg(long)]
    pub owner: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Blob ID
    #[arg(value_name = "ID")]
    pub id: i64,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Maximum number of results (clamped to 1-200)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Blob ID
    #[arg(value_name = "ID")]
    pub id: i64,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text under a password
    Encrypt(EncryptArgs),

    /// Decrypt a blob with its password
    Decrypt(DecryptArgs),

    /// Store an existing blob
    Save(SaveArgs),

    /// Show a stored blob record
    Show(ShowArgs),

    /// List stored blobs, newest first
    List(ListArgs),

    /// Delete a stored blob
    Delete(DeleteArgs),

    /// Health check
    Ping,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
