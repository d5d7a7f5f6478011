//! `roster add` — register a new user.

use roster_core::{FormSession, Registry};

use crate::cli::{GlobalOpts, UserFieldArgs};
use crate::error::CliError;

use super::form;

pub async fn handle(
    registry: &Registry,
    args: UserFieldArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut session = FormSession::new();
    form::apply_args(&mut session, &args);

    // Prompt only when something is missing and a terminal is attached.
    let interactive = !args.fully_specified() && form::can_prompt(global.no_input);
    let submission = form::drive(&mut session, interactive)?;

    let ok = registry
        .add_or_update(submission.user, submission.mode)
        .await;
    super::finish(registry, ok, global)
}
