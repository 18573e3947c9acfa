//! Tracing-backed notifier.
//!
//! Maps notification severities onto tracing levels. Hosts with a real
//! toast surface provide their own `Notifier`; this one is enough for
//! headless embedding and diagnostics.

use quizforge_core::notify::{Notifier, Severity};

/// `Notifier` that emits notifications as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => tracing::info!(target: "quizforge::notify", "{message}"),
            Severity::Warning => tracing::warn!(target: "quizforge::notify", "{message}"),
            Severity::Error => tracing::error!(target: "quizforge::notify", "{message}"),
        }
    }
}
