//! Interactive form driving: prompts that feed the core `FormSession`.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input, Select};

use roster_core::{FormField, FormSession, Gender, Submission};

use crate::cli::UserFieldArgs;
use crate::error::CliError;

/// Apply command-line field values to the session draft.
pub fn apply_args(session: &mut FormSession, args: &UserFieldArgs) {
    if let Some(ref name) = args.name {
        session.set_field(FormField::Name, name.clone());
    }
    if let Some(ref email) = args.email {
        session.set_field(FormField::Email, email.clone());
    }
    if let Some(ref phone) = args.phone {
        session.set_field(FormField::Phone, phone.clone());
    }
    if let Some(gender) = args.gender {
        session.set_gender(gender);
    }
}

/// Whether prompting is both allowed and possible.
pub fn can_prompt(no_input: bool) -> bool {
    !no_input && std::io::stdin().is_terminal()
}

/// Drive the session to a finalized submission.
///
/// Interactive runs prompt for every field (pre-filled with the current
/// draft) and re-prompt while validation fails — the draft keeps the
/// last entry, like the form keeping user input on error. Non-interactive
/// runs get a single attempt; failure lists the field errors.
pub fn drive(session: &mut FormSession, interactive: bool) -> Result<Submission, CliError> {
    loop {
        if interactive {
            prompt_all(session)?;
        }

        if let Some(submission) = session.submit() {
            return Ok(submission);
        }

        let details = session
            .errors()
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("\n");

        if !interactive {
            return Err(CliError::InvalidInput { details });
        }
        eprintln!("{details}");
    }
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_error)
}

// ── Private helpers ──────────────────────────────────────────────────

fn prompt_all(session: &mut FormSession) -> Result<(), CliError> {
    let draft = session.draft().clone();

    let name = text_prompt("Full name", &draft.name)?;
    session.set_field(FormField::Name, name);

    let email = text_prompt("Email", &draft.email)?;
    session.set_field(FormField::Email, email);

    let phone = text_prompt("Phone number", &draft.phone)?;
    session.set_field(FormField::Phone, phone);

    let labels: Vec<String> = Gender::ALL.iter().map(ToString::to_string).collect();
    let current = Gender::ALL
        .iter()
        .position(|g| *g == draft.gender)
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(current)
        .interact()
        .map_err(prompt_error)?;
    session.set_gender(Gender::ALL[picked]);

    Ok(())
}

fn text_prompt(prompt: &str, initial: &str) -> Result<String, CliError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(err))
}
