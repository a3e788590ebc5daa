//! Channel-based notifier.
//!
//! Forwards notifications over a tokio unbounded channel so they can be
//! consumed outside the UI loop (another thread, an async task, a test).

use tokio::sync::mpsc;
use tracing::debug;

use super::{Notification, Notifier};

/// A notifier that pushes every notification into a channel.
///
/// # Example
///
/// ```
/// use groupwatch::{ChannelNotifier, Notification, Notifier};
///
/// # tokio_test::block_on(async {
/// let (mut rx, mut notifier) = ChannelNotifier::create();
/// notifier.notify(&Notification::GroupCreated {
///     id: "queues".into(),
///     name: "Queues".into(),
/// });
///
/// let received = rx.recv().await.unwrap();
/// assert!(matches!(received, Notification::GroupCreated { .. }));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier from an existing sender.
    pub fn new(sender: mpsc::UnboundedSender<Notification>) -> Self {
        Self { sender }
    }

    /// Create a channel pair.
    ///
    /// Returns (receiver, notifier); hand the notifier to
    /// [`App::subscribe`](crate::App::subscribe) and read from the receiver.
    pub fn create() -> (mpsc::UnboundedReceiver<Notification>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (rx, Self::new(tx))
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self, notification: &Notification) {
        if self.sender.send(notification.clone()).is_err() {
            // Receiver dropped
            debug!("Notification receiver closed, dropping {:?}", notification);
        }
    }
}
