//! User-facing notifications.
//!
//! Fire-and-forget: a sink shows the message however it likes and never
//! reports back.

use std::sync::{Arc, Mutex};

use tracing::error;

/// Shown when a requested unit has no stock. Shared by add and update.
pub const OUT_OF_STOCK: &str = "Requested quantity is out of stock";
/// Generic add failure.
pub const ADD_FAILED: &str = "Failed to add product";
/// Generic remove failure.
pub const REMOVE_FAILED: &str = "Failed to remove product";
/// Generic quantity update failure.
pub const UPDATE_FAILED: &str = "Failed to update product quantity";

/// Where error notifications go.
pub trait Notifier: Send + Sync {
    /// Surface an error message to the user.
    fn error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Sends notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        error!(notification = message, "cart notification");
    }
}

/// Keeps every message, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Drain the recorded messages.
    pub fn take(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut m| std::mem::take(&mut *m))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
