//! Transient, dismissible notifications with one-shot undo.
//!
//! Every optimistic mutation on a list board produces a [`Notification`]
//! describing the action. A notification may carry an inverse operation;
//! taking it consumes it, so undo is available exactly once and expires
//! when the notification is dropped (dismissed).

/// Severity/kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    /// An action completed.
    Success,
    /// Informational follow-up (e.g. a revert).
    Info,
    /// Something needs attention but nothing failed.
    Warning,
    /// A local validation failure.
    Error,
}

/// A transient notification, generic over the board's undo operation type.
#[derive(Debug)]
pub struct Notification<U> {
    /// Kind of notification.
    pub kind: NotifyKind,
    /// Short title (e.g. "User Added").
    pub title: String,
    /// One-line description of what happened.
    pub description: String,
    undo: Option<U>,
}

impl<U> Notification<U> {
    /// Creates a notification without an undo operation.
    #[must_use]
    pub fn new(
        kind: NotifyKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            undo: None,
        }
    }

    /// Attaches an inverse operation.
    #[must_use]
    pub fn with_undo(mut self, undo: U) -> Self {
        self.undo = Some(undo);
        self
    }

    /// Whether an undo is still available.
    #[must_use]
    pub const fn has_undo(&self) -> bool {
        self.undo.is_some()
    }

    /// Takes the undo operation, consuming it.
    ///
    /// Returns `None` on the second and later calls — undo is one-shot.
    pub const fn take_undo(&mut self) -> Option<U> {
        self.undo.take()
    }
}
