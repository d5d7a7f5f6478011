// ── Upsert orchestrator ──
//
// Glue between the form session, the users API, and the directory.
// The directory only reflects state the server has confirmed: every
// mutation calls the API first and applies locally on success only.

use tokio::sync::watch;
use tracing::{debug, warn};

use roster_api::{UserRecord, UsersClient};

use crate::messages;
use crate::model::{User, UserId};
use crate::notify::{Notifier, Toast};
use crate::session::FormMode;
use crate::store::UserDirectory;

/// Central facade over the users API, the directory, and the notifier.
///
/// Transport failures never escape as errors: they are logged, turned
/// into an operation-specific toast, and reported as a `false` return.
pub struct Registry {
    api: UsersClient,
    directory: UserDirectory,
    notifier: Notifier,
    busy: watch::Sender<bool>,
}

impl Registry {
    pub fn new(api: UsersClient) -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            api,
            directory: UserDirectory::new(),
            notifier: Notifier::new(),
            busy,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether a request is in flight. UI feedback only: nothing stops
    /// a second submission while one is outstanding.
    pub fn busy(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Bulk-load the directory from the server.
    pub async fn hydrate(&self) -> bool {
        self.busy.send_replace(true);
        let ok = match self.api.list_users().await {
            Ok(records) => {
                let users: Vec<User> = records.into_iter().map(User::from).collect();
                debug!(count = users.len(), "hydrated user directory");
                self.directory.replace_all(users);
                self.notifier.notify(Toast::success(messages::USERS_FETCHED));
                true
            }
            Err(e) => {
                warn!(error = %e, "user list fetch failed");
                self.notifier.notify(Toast::error(messages::FETCH_FAILED));
                false
            }
        };
        self.busy.send_replace(false);
        ok
    }

    /// Persist a finalized record, then apply it locally.
    ///
    /// Edit mode updates, Create mode creates. On failure the directory
    /// is left untouched so it never diverges from the server.
    pub async fn add_or_update(&self, user: User, mode: FormMode) -> bool {
        let record = UserRecord::from(&user);

        self.busy.send_replace(true);
        let outcome = match mode {
            FormMode::Edit => self.api.update_user(&record).await,
            FormMode::Create => self.api.create_user(&record).await,
        };

        let ok = match outcome {
            Ok(()) => {
                self.directory.upsert(user);
                let text = match mode {
                    FormMode::Edit => messages::USER_UPDATED,
                    FormMode::Create => messages::USER_ADDED,
                };
                self.notifier.notify(Toast::success(text));
                true
            }
            Err(e) => {
                warn!(error = %e, ?mode, "user upsert failed");
                let text = match mode {
                    FormMode::Edit => messages::UPDATE_FAILED,
                    FormMode::Create => messages::ADD_FAILED,
                };
                self.notifier.notify(Toast::error(text));
                false
            }
        };
        self.busy.send_replace(false);
        ok
    }

    /// Delete a record on the server, then remove it locally.
    pub async fn delete(&self, id: &UserId) -> bool {
        self.busy.send_replace(true);
        let ok = match self.api.delete_user(id.as_str()).await {
            Ok(()) => {
                self.directory.remove(id);
                self.notifier.notify(Toast::success(messages::USER_DELETED));
                true
            }
            Err(e) => {
                warn!(error = %e, id = %id, "user delete failed");
                self.notifier.notify(Toast::error(messages::DELETE_FAILED));
                false
            }
        };
        self.busy.send_replace(false);
        ok
    }
}
