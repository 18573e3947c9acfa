//! Notification port.
//!
//! Fire-and-forget user-facing messages. The editor workflow reports
//! every recoverable outcome through exactly one notification; there is
//! no acknowledgment and no queue-overflow policy needed at this scale.

/// How loudly to present a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Outward notification channel (toast presentation in the original).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier that drops everything. Useful for the player, where the
/// update callback is a no-op and nothing is ever reported.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}
