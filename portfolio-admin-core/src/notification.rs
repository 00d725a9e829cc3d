//! 全局通知状态
//!
//! One slot, last write wins. Readers either poll [`NotificationCenter::current`]
//! or hold a [`watch::Receiver`] from [`NotificationCenter::subscribe`].

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use portfolio_admin_client::NotificationSink;

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
}

/// An open notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Process-wide notification slot.
///
/// Cloning shares the slot. A new value replaces the previous one; there is
/// no queue.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    slot: Arc<watch::Sender<Option<Notification>>>,
}

impl NotificationCenter {
    /// Create a closed notification slot
    #[must_use]
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
        }
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into());
    }

    pub fn show_success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message.into());
    }

    /// Close the dialog. No-op when already closed.
    pub fn close(&self) {
        self.slot.send_if_modified(|current| current.take().is_some());
    }

    /// Snapshot of the slot.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().clone()
    }

    /// Receiver that observes every change to the slot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.slot.subscribe()
    }

    fn show(&self, kind: NotificationKind, message: String) {
        log::debug!("notification ({kind:?}): {message}");
        self.slot.send_replace(Some(Notification { kind, message }));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for NotificationCenter {
    fn notify_error(&self, message: &str) {
        self.show_error(message);
    }
}
