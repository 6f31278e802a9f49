use dialoguer::Password;
use secrecy::SecretString;

use crate::constants::env_vars;
use crate::errors::CliError;

/// Read the password from `SEALBOX_PASSWORD`, else prompt on the terminal.
///
/// `confirm` asks twice.
pub fn read_password(interactive: bool, confirm: bool) -> anyhow::Result<SecretString> {
    if let Some(value) = env_password() {
        return Ok(SecretString::from(value));
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Set {}.",
            env_vars::PASSWORD
        ))
        .into());
    }

    let value = if confirm {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
    } else {
        Password::new().with_prompt("Password").interact()
    }
    .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    Ok(SecretString::from(value))
}

fn env_password() -> Option<String> {
    std::env::var(env_vars::PASSWORD)
        .ok()
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;
    use crate::errors::exit_code_for;

    #[test]
    fn test_non_interactive_without_env_is_invalid_input() {
        if env_password().is_some() {
            return;
        }
        let err = read_password(false, false).unwrap_err();
        assert!(err.to_string().contains("SEALBOX_PASSWORD"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }
}
