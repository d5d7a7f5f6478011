//! `roster list` — hydrate from the server and print the users table.

use roster_core::{Registry, User, messages};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn handle(registry: &Registry, global: &GlobalOpts) -> Result<(), CliError> {
    if !registry.hydrate().await {
        return super::finish(registry, false, global);
    }

    let snapshot = registry.directory().all();
    if snapshot.is_empty() && matches!(global.output, OutputFormat::Table) {
        println!("{}", messages::NO_USERS);
        return Ok(());
    }

    // Snapshot order is map order; sort for stable display.
    let mut users: Vec<User> = snapshot.iter().map(|u| (**u).clone()).collect();
    users.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    println!("{}", output::render_users(&global.output, &users));
    Ok(())
}
