//! Notification slot - one transient, auto-expiring message at a time

use std::time::Duration;

use tokio::time::Instant;

/// How a notification is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Identifies one shown notification, so a stale dismissal can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// A transient message that auto-expires
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// When this message expires
    pub expires_at: Instant,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Single-slot holder: showing a notification replaces whatever is visible
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    last_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible notification and restart its display clock
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> NotificationId {
        self.last_id += 1;
        let id = NotificationId(self.last_id);
        self.current = Some(Notification {
            id,
            message: message.into(),
            severity,
            expires_at: Instant::now() + duration,
        });
        id
    }

    /// Dismiss the notification `id`; ignored if it was already replaced
    ///
    /// Returns whether anything was dismissed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(current) if current.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_SECONDS: Duration = Duration::from_secs(3);

    #[test]
    fn test_show_replaces_visible_notification() {
        let mut slot = NotificationSlot::new();
        slot.show("first", Severity::Info, THREE_SECONDS);
        slot.show("second", Severity::Error, THREE_SECONDS);

        let current = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert!(current.is_error());
    }

    #[test]
    fn test_stale_dismissal_is_ignored() {
        let mut slot = NotificationSlot::new();
        let first = slot.show("first", Severity::Info, THREE_SECONDS);
        let second = slot.show("second", Severity::Info, THREE_SECONDS);

        assert!(!slot.dismiss(first));
        assert_eq!(slot.message(), Some("second"));
        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut slot = NotificationSlot::new();
        let a = slot.show("a", Severity::Info, THREE_SECONDS);
        let b = slot.show("a", Severity::Info, THREE_SECONDS);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let mut slot = NotificationSlot::new();
        slot.show("a", Severity::Info, THREE_SECONDS);
        assert!(!slot.current().unwrap().is_expired());
    }
}
