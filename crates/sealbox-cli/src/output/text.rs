//! Plain text and table output for blob records.

use chrono::{DateTime, SecondsFormat, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use sealbox_core::storage::{BlobRecord, BlobSummary};

const NOTE_PREVIEW_CHARS: usize = 40;

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Key/value view of a full record.
pub fn format_record(record: &BlobRecord) -> String {
    let mut lines = vec![
        format!("ID:         {}", record.id),
        format!("Created:    {}", format_timestamp(&record.created_at)),
        format!("Algorithm:  {}", record.algorithm),
        format!("KDF:        {}", record.kdf),
    ];
    if let Some(filename) = &record.filename {
        lines.push(format!("Filename:   {}", filename));
    }
    if let Some(owner) = &record.owner {
        lines.push(format!("Owner:      {}", owner));
    }
    if let Some(note) = &record.note {
        lines.push(format!("Note:       {}", note));
    }
    lines.push(String::new());
    lines.push(record.ciphertext_b64.clone());
    lines.join("\n")
}

/// Table of summaries, newest first as given.
pub fn summary_table(summaries: &[BlobSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Created", "Filename", "Note"]);

    for summary in summaries {
        table.add_row(vec![
            summary.id.to_string(),
            format_timestamp(&summary.created_at),
            summary.filename.clone().unwrap_or_else(|| "-".to_string()),
            summary
                .note
                .as_deref()
                .map(preview)
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}

fn preview(note: &str) -> String {
    let first_line = note.lines().next().unwrap_or("");
    if first_line.chars().count() > NOTE_PREVIEW_CHARS || first_line.len() < note.len() {
        let cut: String = first_line.chars().take(NOTE_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        first_line.to_string()
    }
}
