//! Clap derive structures for the `roster` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use roster_core::Gender;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// roster -- user registration from the command line
#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Manage a user roster backed by a REST API",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Users API base URL (overrides the config file)
    #[arg(long, env = "ROSTER_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Never prompt; fail instead when required input is missing
    #[arg(long, global = true)]
    pub no_input: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all registered users
    List,

    /// Register a new user
    Add(UserFieldArgs),

    /// Edit an existing user
    Edit(EditArgs),

    /// Delete a user
    Delete(DeleteArgs),
}

/// Field values for the registration form. Anything left unset is
/// prompted for interactively (unless `--no-input`).
#[derive(Debug, Default, Args)]
pub struct UserFieldArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number (10 digits)
    #[arg(long)]
    pub phone: Option<String>,

    /// Gender: male, female, or others
    #[arg(long)]
    pub gender: Option<Gender>,
}

impl UserFieldArgs {
    /// Whether every text field was supplied on the command line.
    pub fn fully_specified(&self) -> bool {
        self.name.is_some() && self.email.is_some() && self.phone.is_some()
    }

    /// Whether any field was supplied on the command line.
    pub fn any_specified(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.gender.is_some()
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the user to edit
    pub id: String,

    #[command(flatten)]
    pub fields: UserFieldArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the user to delete
    pub id: String,
}
