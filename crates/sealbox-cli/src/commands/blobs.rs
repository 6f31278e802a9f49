//! Stored blob commands: `save`, `show`, `list`, `delete`.

use sealbox_core::api::SaveRequest;

use crate::app::AppContext;
use crate::cli::{DeleteArgs, ListArgs, SaveArgs, ShowArgs};
use crate::helpers::read_blob;
use crate::output::{format_record, format_timestamp, print_json, summary_table};

pub fn handle_save(ctx: &AppContext, args: &SaveArgs) -> anyhow::Result<()> {
    let ciphertext_b64 = read_blob(args.blob.clone())?;
    let sealbox = ctx.sealbox()?;
    let saved = sealbox.save(&SaveRequest {
        ciphertext_b64,
        filename: args.meta.filename.clone(),
        note: args.meta.note.clone(),
        owner: args.meta.owner.clone(),
    })?;

    if ctx.json() {
        return print_json(&saved);
    }
    if ctx.quiet() {
        println!("{}", saved.id);
    } else {
        println!(
            "Saved blob {} at {}",
            saved.id,
            format_timestamp(&saved.created_at)
        );
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let record = ctx.sealbox()?.get(args.id)?;
    if ctx.json() {
        return print_json(&record);
    }
    println!("{}", format_record(&record));
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let summaries = ctx.sealbox()?.list(args.limit)?;
    if ctx.json() {
        return print_json(&summaries);
    }
    if summaries.is_empty() {
        if !ctx.quiet() {
            println!("No blobs stored.");
        }
        return Ok(());
    }
    if ctx.quiet() {
        for summary in &summaries {
            println!("{}", summary.id);
        }
        return Ok(());
    }
    println!("{}", summary_table(&summaries));
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let deleted = ctx.sealbox()?.delete(args.id)?;
    if ctx.json() {
        return print_json(&deleted);
    }
    if !ctx.quiet() {
        println!("Deleted blob {}", args.id);
    }
    Ok(())
}
