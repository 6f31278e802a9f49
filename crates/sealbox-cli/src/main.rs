//! Sealbox CLI - password-based encryption of text, with optional blob storage
//!
//! Thin command-line surface over `sealbox-core`: it gathers input and the
//! password, calls the `Sealbox` service, and renders the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::Parser;

use crate::app::{load_config, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{blobs, crypto, misc};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init_tracing(None);
            exit_with(&e);
        }
    };
    logging::init_tracing(config.log.filter.as_deref());

    let ctx = AppContext::new(&cli, config);
    if let Err(e) = run(&ctx) {
        exit_with(&e);
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Commands::Encrypt(args) => crypto::handle_encrypt(ctx, args),
        Commands::Decrypt(args) => crypto::handle_decrypt(ctx, args),
        Commands::Save(args) => blobs::handle_save(ctx, args),
        Commands::Show(args) => blobs::handle_show(ctx, args),
        Commands::List(args) => blobs::handle_list(ctx, args),
        Commands::Delete(args) => blobs::handle_delete(ctx, args),
        Commands::Ping => misc::handle_ping(ctx),
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}

fn exit_with(err: &anyhow::Error) -> ! {
    let code = exit_code_for(err);
    tracing::debug!(code, error = ?err, "command failed");
    eprintln!("Error: {}", err);
    std::process::exit(code)
}
