//! Outbound notifications.
//!
//! The session controller reports noteworthy events (currently only group
//! creation) to any number of [`Notifier`]s. The TUI shows them as a toast in
//! the status bar; library users can subscribe a [`ChannelNotifier`] to
//! receive them elsewhere.

mod channel;

pub use channel::ChannelNotifier;

use std::fmt::{self, Debug};

/// An event emitted by the session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A new measurement group was created and added to the store.
    GroupCreated { id: String, name: String },
}

impl Notification {
    /// User-facing message for this event.
    pub fn message(&self) -> String {
        match self {
            Notification::GroupCreated { name, .. } => {
                format!("Measurement group \"{}\" created successfully!", name)
            }
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Receiver of session notifications.
///
/// # Example
///
/// ```
/// use groupwatch::{Notification, Notifier};
///
/// #[derive(Debug, Default)]
/// struct Collect(Vec<String>);
///
/// impl Notifier for Collect {
///     fn notify(&mut self, notification: &Notification) {
///         self.0.push(notification.message());
///     }
/// }
///
/// let mut sink = Collect::default();
/// sink.notify(&Notification::GroupCreated {
///     id: "api".into(),
///     name: "API".into(),
/// });
/// assert_eq!(sink.0[0], "Measurement group \"API\" created successfully!");
/// ```
pub trait Notifier: Send + Debug {
    /// Deliver a notification. Must not block.
    fn notify(&mut self, notification: &Notification);
}
