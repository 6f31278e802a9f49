//! Output formatting helpers for the CLI.
//!
//! JSON goes through serde so the shapes match the core response types;
//! text output is meant for people, with tables for listings.

mod json;
mod text;

pub use json::print_json;
pub use text::{format_record, format_timestamp, summary_table};
