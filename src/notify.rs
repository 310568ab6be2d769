//! Transient user notifications ("toasts").
//!
//! Views and forms push onto a [`Notifier`]; a single UI layer drains the
//! matching [`Notifications`] receiver.

use crate::error::ClientError;
use std::fmt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
        };
        write!(f, "[{}] {}", label, self.message)
    }
}

/// Sending half; cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

/// Receiving half, owned by the UI layer.
#[derive(Debug)]
pub struct Notifications {
    rx: mpsc::UnboundedReceiver<Notification>,
}

/// Create a connected notifier/receiver pair.
pub fn channel() -> (Notifier, Notifications) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, Notifications { rx })
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    /// Surface a failed action to the user.
    pub fn client_error(&self, err: &ClientError) {
        self.error(err.user_message());
    }

    fn push(&self, kind: NotificationKind, message: String) {
        // A closed receiver means the UI is gone; nothing left to show.
        if self.tx.send(Notification { kind, message }).is_err() {
            tracing::debug!("Notification dropped: receiver closed");
        }
    }
}

impl Notifications {
    /// Take every notification queued so far without waiting.
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Ok(n) = self.rx.try_recv() {
            out.push(n);
        }
        out
    }

    /// Wait for the next notification. Returns `None` once every
    /// notifier is dropped.
    pub async fn next(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let (notifier, mut notifications) = channel();
        notifier.success("Tip updated successfully!");
        notifier.client_error(&ClientError::Unauthenticated);

        let drained = notifications.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind, NotificationKind::Success);
        assert_eq!(drained[1].message, "Please log in to continue.");
        assert!(notifications.drain().is_empty());
    }

    #[tokio::test]
    async fn test_next_ends_when_notifiers_dropped() {
        let (notifier, mut notifications) = channel();
        notifier.error("Vote failed");
        drop(notifier);

        assert_eq!(notifications.next().await.unwrap().message, "Vote failed");
        assert!(notifications.next().await.is_none());
    }
}
