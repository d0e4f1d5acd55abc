//! The single transient notification channel.
//!
//! Producers set message, severity and visibility in one call; the shell
//! subscribes and renders whatever is current.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}

#[derive(Clone)]
pub struct Notifier {
    tx: Arc<watch::Sender<Notification>>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Notification::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let notification = Notification {
            message: message.into(),
            severity,
            visible: true,
        };
        tracing::debug!(severity = ?notification.severity, message = %notification.message, "Notification");
        self.tx.send_replace(notification);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    /// Hide the current notification, keeping its text for fade-out.
    pub fn dismiss(&self) {
        self.tx.send_modify(|n| n.visible = false);
    }

    pub fn current(&self) -> Notification {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
