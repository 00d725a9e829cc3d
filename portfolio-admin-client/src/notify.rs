//! Notification seam between the client and whatever displays errors.

/// Receives the user-facing message of every failed API call.
///
/// `ApiClient` calls [`notify_error`](NotificationSink::notify_error) exactly
/// once per failed call. Implementations must not block.
pub trait NotificationSink: Send + Sync {
    /// Publish an error message.
    fn notify_error(&self, message: &str);
}

/// Sink that only logs. Used when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlySink;

impl NotificationSink for LogOnlySink {
    fn notify_error(&self, message: &str) {
        log::info!("[notify] {message}");
    }
}
