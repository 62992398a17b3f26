use std::time::{Duration, Instant};

/// How long an informational notification stays on screen
const INFO_DURATION: Duration = Duration::from_millis(2500);

/// Warnings carry remediation text; give them time to be read
const WARNING_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    fn new(message: &str, notification_type: NotificationType, duration: Duration) -> Self {
        Self {
            message: message.to_string(),
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Holds the notification currently on screen (at most one)
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an informational message, replacing any current one
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(
            message,
            NotificationType::Info,
            INFO_DURATION,
        ));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(
            message,
            NotificationType::Warning,
            WARNING_DURATION,
        ));
    }

    #[cfg(test)]
    pub(crate) fn show_for(&mut self, message: &str, duration: Duration) {
        self.current = Some(Notification::new(
            message,
            NotificationType::Info,
            duration,
        ));
    }

    /// Drop the notification once expired; returns true if it was removed
    pub fn update(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
