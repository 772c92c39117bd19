//! Transient notification queue (toasts).
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user-facing outcome (validation failure, success, clipboard copy)
//! is surfaced through this queue. It is the only feedback channel: there are
//! no blocking dialogs. The `Toaster` component renders it and schedules the
//! auto-dismiss timers.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Maximum number of toasts visible at once; the oldest is evicted first.
pub const MAX_VISIBLE: usize = 3;

/// How long a toast stays on screen before it dismisses itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

/// A title/description/severity triple ready to be shown.
///
/// Errors across the client convert into a `Notice` so pages never format
/// user-facing messages themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, severity: Severity::Normal }
    }

    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: Some(description.into()), severity: Severity::Normal }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: Some(description.into()), severity: Severity::Destructive }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// A notice that has been queued and assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl NotificationState {
    /// Queue a notice and return its id. Evicts the oldest toast past the cap.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Unknown ids are ignored (it may already have been evicted).
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
