//! Output formatting: users table, JSON, plain ids, and toast lines.

use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use roster_core::{Toast, ToastKind, User};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Table row ────────────────────────────────────────────────────────

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Gender")]
    gender: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            gender: user.gender.to_string(),
        }
    }
}

// ── Renderers ────────────────────────────────────────────────────────

/// Render the user list in the chosen format.
pub fn render_users(format: &OutputFormat, users: &[User]) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(users).expect("serialization should not fail")
        }
        OutputFormat::Plain => users
            .iter()
            .map(|u| u.id.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Print a toast as a one-line status message on stderr.
pub fn print_toast(toast: &Toast, color: bool) {
    let icon = match toast.kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✗",
        ToastKind::Warning => "!",
        ToastKind::Info => "·",
    };

    if color {
        let icon = match toast.kind {
            ToastKind::Success => icon.green().to_string(),
            ToastKind::Error => icon.red().to_string(),
            ToastKind::Warning => icon.yellow().to_string(),
            ToastKind::Info => icon.cyan().to_string(),
        };
        eprintln!("{icon} {}", toast.text);
    } else {
        eprintln!("{icon} {}", toast.text);
    }
}
