//! Domain logic for the roster user-registration system.
//!
//! This crate owns everything between the HTTP client (`roster-api`)
//! and the view layer:
//!
//! - **[`FormSession`]** — Create/Edit state machine holding the draft
//!   record and its field errors; `submit()` runs the trim → validate →
//!   assign-id cycle and emits a finalized record.
//!
//! - **[`UserDirectory`]** — keyed in-memory collection (`DashMap` plus
//!   a `tokio::sync::watch` snapshot channel) that view layers render
//!   from and subscribe to.
//!
//! - **[`Registry`]** — the upsert orchestrator. Confirm-before-apply:
//!   every mutation calls the API first and touches the directory only
//!   on confirmed success; failures become [`Toast`]s, never panics or
//!   bubbled errors.
//!
//! - **[`Notifier`]** — single active toast with a 3-second cancellable
//!   auto-dismiss.
//!
//! - **Domain model** ([`model`]) — [`User`], [`Gender`], [`UserId`]
//!   (empty-string sentinel for "not yet assigned"), converted to and
//!   from the wire shape in [`convert`].

pub mod convert;
pub mod ids;
pub mod messages;
pub mod model;
pub mod notify;
pub mod registry;
pub mod session;
pub mod store;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use ids::IdGenerator;
pub use model::{Gender, User, UserId};
pub use notify::{Notifier, Toast, ToastKind};
pub use registry::Registry;
pub use session::{FormMode, FormSession, Submission};
pub use store::UserDirectory;
pub use validate::{FormField, UserValidator, ValidationResult, Validator};
