//! Input handling for positional text or stdin.

use std::io::{self, IsTerminal, Read};

use crate::errors::CliError;

/// Plaintext from the argument, else stdin with one trailing line ending removed.
pub fn read_plaintext(arg: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }
    let buffer = read_stdin("TEXT")?;
    Ok(strip_line_ending(buffer))
}

/// Base64 blob from the argument, else stdin, trimmed.
pub fn read_blob(arg: Option<String>) -> anyhow::Result<String> {
    let value = match arg {
        Some(value) => value,
        None => read_stdin("BLOB")?,
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("Ciphertext required").into());
    }
    Ok(trimmed.to_string())
}

fn read_stdin(name: &str) -> anyhow::Result<String> {
    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input(format!(
            "No {} given; pass it as an argument or pipe it via stdin",
            name
        ))
        .into());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

fn strip_line_ending(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}
