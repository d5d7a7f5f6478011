//! Command handlers.

pub mod add;
pub mod delete;
pub mod edit;
pub mod form;
pub mod list;

use roster_core::Registry;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Command,
    registry: &Registry,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::List => list::handle(registry, global).await,
        Command::Add(args) => add::handle(registry, args, global).await,
        Command::Edit(args) => edit::handle(registry, args, global).await,
        Command::Delete(args) => delete::handle(registry, args, global).await,
    }
}

/// Report the outcome of a registry operation.
///
/// Success prints the toast the registry raised; failure converts the
/// toast text into a `CliError` so the process exits non-zero.
pub fn finish(registry: &Registry, ok: bool, global: &GlobalOpts) -> Result<(), CliError> {
    let toast = registry.notifier().current();
    if ok {
        if let Some(toast) = toast {
            output::print_toast(&toast, output::should_color(&global.color));
        }
        Ok(())
    } else {
        Err(CliError::Operation {
            message: toast.map_or_else(|| "operation failed".to_owned(), |t| t.text),
        })
    }
}
