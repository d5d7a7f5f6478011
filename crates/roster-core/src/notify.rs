// ── Toast notifications ──
//
// A single active toast, published through a `watch` channel, with a
// scheduled auto-dismiss. Replacing the active toast cancels the prior
// dismissal before scheduling a new one.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// How long a toast stays up before dismissing itself.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Toast severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Warning,
            text: text.into(),
        }
    }
}

/// Owner of the single active toast.
///
/// `notify` must be called from within a tokio runtime; the dismissal
/// timer runs as a spawned task guarded by a cancellation token.
pub struct Notifier {
    current: watch::Sender<Option<Toast>>,
    ttl: Duration,
    pending_dismiss: Mutex<CancellationToken>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_ttl(TOAST_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            current,
            ttl,
            pending_dismiss: Mutex::new(CancellationToken::new()),
        }
    }

    /// Show a toast, replacing any active one and rescheduling the
    /// auto-dismiss from now.
    pub fn notify(&self, toast: Toast) {
        let token = self.swap_pending(CancellationToken::new());

        self.current.send_replace(Some(toast));

        let tx = self.current.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(ttl) => {
                    tx.send_replace(None);
                }
            }
        });
    }

    /// Clear the active toast immediately (user close action).
    pub fn dismiss(&self) {
        self.swap_pending(CancellationToken::new());
        self.current.send_replace(None);
    }

    /// The active toast, if any.
    pub fn current(&self) -> Option<Toast> {
        self.current.borrow().clone()
    }

    /// Subscribe to toast changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Toast>> {
        self.current.subscribe()
    }

    /// Install a fresh dismissal token, cancelling the previous one.
    /// Returns the freshly installed token for the new timer task.
    fn swap_pending(&self, fresh: CancellationToken) -> CancellationToken {
        let mut guard = self
            .pending_dismiss
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, fresh.clone());
        previous.cancel();
        fresh
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_auto_dismisses_after_ttl() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.notify(Toast::success("saved"));
        rx.changed().await.unwrap();
        assert_eq!(notifier.current().unwrap().text, "saved");

        // The paused clock advances through the 3s timer.
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_toast_cancels_prior_dismissal() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.notify(Toast::success("first"));
        notifier.notify(Toast::error("second"));

        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update().as_ref().unwrap().text,
            "second".to_owned()
        );

        // Only the second toast's timer is live; when it fires the
        // toast clears exactly once.
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_clears_immediately() {
        let notifier = Notifier::new();

        notifier.notify(Toast::info("hello"));
        assert!(notifier.current().is_some());

        notifier.dismiss();
        assert!(notifier.current().is_none());

        // The cancelled timer never resurrects anything.
        tokio::time::sleep(TOAST_TTL * 2).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_ttl_is_respected() {
        let notifier = Notifier::with_ttl(Duration::from_millis(50));
        let mut rx = notifier.subscribe();

        notifier.notify(Toast::warning("brief"));
        rx.changed().await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }
}
