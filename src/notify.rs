//! Transient notifications shown after an update.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

/// The single notification slot of a screen; a new one replaces the old.
#[derive(Debug, Default)]
pub struct Toasts {
    current: Option<Notification>,
}

impl Toasts {
    pub fn show(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!(message = %notification.message, "notify"),
            NotificationLevel::Error => tracing::warn!(message = %notification.message, "notify"),
        }
        self.current = Some(notification);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the notification once it has been visible for `ttl`.
    pub fn expire(&mut self, ttl: Duration, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.is_expired(ttl, now))
        {
            self.current = None;
        }
    }
}
