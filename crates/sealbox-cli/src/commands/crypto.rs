//! `encrypt` and `decrypt`.

use secrecy::ExposeSecret;

use sealbox_core::api::{DecryptRequest, EncryptRequest, SaveRequest};

use crate::app::AppContext;
use crate::cli::{DecryptArgs, EncryptArgs};
use crate::errors::CliError;
use crate::helpers::{read_blob, read_plaintext};
use crate::output::{format_timestamp, print_json};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let meta = &args.meta;
    if !args.save && (meta.filename.is_some() || meta.note.is_some() || meta.owner.is_some()) {
        return Err(
            CliError::invalid_input("--filename, --note and --owner require --save").into(),
        );
    }

    let plaintext = read_plaintext(args.text.clone())?;
    let password = ctx.password(true)?;
    let sealbox = if args.save {
        ctx.sealbox()?
    } else {
        ctx.detached()?
    };

    let sealed = sealbox.encrypt(&EncryptRequest::new(plaintext, password.expose_secret()))?;

    if !args.save {
        if ctx.json() {
            return print_json(&sealed);
        }
        println!("{}", sealed.ciphertext_b64);
        return Ok(());
    }

    let saved = sealbox.save(&SaveRequest {
        ciphertext_b64: sealed.ciphertext_b64.clone(),
        filename: meta.filename.clone(),
        note: meta.note.clone(),
        owner: meta.owner.clone(),
    })?;
    tracing::debug!(id = saved.id, "encrypted and saved blob");

    if ctx.json() {
        return print_json(&serde_json::json!({
            "ciphertext_b64": sealed.ciphertext_b64,
            "id": saved.id,
            "created_at": saved.created_at,
        }));
    }
    println!("{}", sealed.ciphertext_b64);
    if !ctx.quiet() {
        eprintln!(
            "Saved blob {} at {}",
            saved.id,
            format_timestamp(&saved.created_at)
        );
    }
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let opened = match args.id {
        Some(id) => {
            let sealbox = ctx.sealbox()?;
            // Surface a missing ID before asking for a password.
            let record = sealbox.get(id)?;
            let password = ctx.password(false)?;
            sealbox.decrypt(&DecryptRequest::new(
                record.ciphertext_b64,
                password.expose_secret(),
            ))?
        }
        None => {
            let blob = read_blob(args.blob.clone())?;
            let password = ctx.password(false)?;
            ctx.detached()?
                .decrypt(&DecryptRequest::new(blob, password.expose_secret()))?
        }
    };

    if ctx.json() {
        return print_json(&opened);
    }
    println!("{}", opened.plaintext);
    Ok(())
}
