//! Transient toast notifications with scheduled expiry.
//!
//! Removal is not a detached timer: each toast carries its deadline and the
//! owner calls [`NotificationQueue::expire`] on every tick. Dropping or
//! clearing the queue cancels every pending removal.

use std::time::{Duration, Instant};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    ttl: Duration,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, message: impl Into<String>, kind: NotificationKind) -> Uuid {
        self.enqueue_at(message, kind, Instant::now())
    }

    /// Enqueue as if at `now`; the toast expires at `now + ttl`.
    pub fn enqueue_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let message = message.into();
        tracing::debug!(%id, ?kind, "toast: {message}");
        self.items.push(Notification {
            id,
            message,
            kind,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Drop every toast whose deadline has passed. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.expires_at > now);
        before - self.items.len()
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Cancel all pending toasts (teardown).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new(Duration::from_secs(3));
        queue.enqueue_at("Register Success", NotificationKind::Success, start);
        queue.enqueue_at(
            "Failed to load user data",
            NotificationKind::Error,
            start + Duration::from_secs(2),
        );

        assert_eq!(queue.expire(start + Duration::from_secs(1)), 0);
        assert_eq!(queue.expire(start + Duration::from_secs(3)), 1);
        assert_eq!(queue.items()[0].message, "Failed to load user data");
        assert_eq!(queue.expire(start + Duration::from_secs(5)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_only_matching_id() {
        let mut queue = NotificationQueue::new(Duration::from_secs(3));
        let first = queue.enqueue("a", NotificationKind::Info);
        queue.enqueue("b", NotificationKind::Info);
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_cancels_pending() {
        let mut queue = NotificationQueue::new(Duration::from_secs(3));
        queue.enqueue("a", NotificationKind::Error);
        queue.clear();
        assert_eq!(queue.count_of(NotificationKind::Error), 0);
    }
}
