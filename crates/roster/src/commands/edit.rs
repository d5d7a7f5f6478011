//! `roster edit <id>` — load a stored user into the form and update it.

use roster_core::{FormSession, Registry, UserId};

use crate::cli::{EditArgs, GlobalOpts};
use crate::error::CliError;

use super::form;

pub async fn handle(
    registry: &Registry,
    args: EditArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !registry.hydrate().await {
        return super::finish(registry, false, global);
    }

    let id = UserId::new(args.id.clone());
    let Some(user) = registry.directory().get(&id) else {
        return Err(CliError::UserNotFound { id: args.id });
    };

    let mut session = FormSession::new();
    session.load_for_edit(&user);
    form::apply_args(&mut session, &args.fields);

    // Field flags make this a one-shot update; otherwise walk the form
    // with the stored values pre-filled.
    let interactive = !args.fields.any_specified() && form::can_prompt(global.no_input);
    let submission = form::drive(&mut session, interactive)?;

    let ok = registry
        .add_or_update(submission.user, submission.mode)
        .await;
    super::finish(registry, ok, global)
}
