//! `roster delete <id>` — remove a user after confirmation.

use roster_core::{Registry, UserId, messages};

use crate::cli::{DeleteArgs, GlobalOpts};
use crate::error::CliError;

use super::form;

pub async fn handle(
    registry: &Registry,
    args: DeleteArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.yes {
        if !form::can_prompt(global.no_input) {
            return Err(CliError::NonInteractiveRequiresYes);
        }
        if !form::confirm(messages::CONFIRM_DELETE, false)? {
            return Ok(());
        }
    }

    let ok = registry.delete(&UserId::new(args.id)).await;
    super::finish(registry, ok, global)
}
