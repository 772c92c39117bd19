//! Transfer session: hand an asset (by hash) to another wallet or user.
//!
//! Unlike Upload/Verify there is no kind or file: the inputs are two
//! free-text fields validated on submit.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use time::OffsetDateTime;

use crate::state::notify::Notice;
use crate::state::workflow::WorkflowError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferPhase {
    Editing,
    Submitting,
    Completed,
}

/// Read-only result of a completed transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    pub transaction_hash: String,
    pub completed_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Stage {
    Editing,
    Submitting { ticket: u64 },
    Completed(TransferReceipt),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferSession {
    source_hash: String,
    recipient: String,
    stage: Stage,
    last_ticket: u64,
}

impl Default for TransferSession {
    fn default() -> Self {
        Self { source_hash: String::new(), recipient: String::new(), stage: Stage::Editing, last_ticket: 0 }
    }
}

impl TransferSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> TransferPhase {
        match self.stage {
            Stage::Editing => TransferPhase::Editing,
            Stage::Submitting { .. } => TransferPhase::Submitting,
            Stage::Completed(_) => TransferPhase::Completed,
        }
    }

    #[must_use]
    pub fn source_hash(&self) -> &str {
        &self.source_hash
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[must_use]
    pub fn receipt(&self) -> Option<&TransferReceipt> {
        match &self.stage {
            Stage::Completed(receipt) => Some(receipt),
            _ => None,
        }
    }

    #[must_use]
    pub fn transaction_hash(&self) -> Option<&str> {
        self.receipt().map(|r| r.transaction_hash.as_str())
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.stage, Stage::Submitting { .. })
    }

    /// Edit the asset hash. Ignored outside `Editing`.
    pub fn set_source_hash(&mut self, value: impl Into<String>) {
        if self.stage == Stage::Editing {
            self.source_hash = value.into();
        }
    }

    /// Edit the recipient. Ignored outside `Editing`.
    pub fn set_recipient(&mut self, value: impl Into<String>) {
        if self.stage == Stage::Editing {
            self.recipient = value.into();
        }
    }

    /// Validate both fields and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// `AssetHashRequired` / `RecipientRequired` when a field is blank (the
    /// hash is checked first), `AlreadySubmitting` / `AlreadyCompleted`
    /// outside `Editing`.
    pub fn begin_submit(&mut self) -> Result<u64, WorkflowError> {
        match self.stage {
            Stage::Editing => {}
            Stage::Submitting { .. } => return Err(WorkflowError::AlreadySubmitting),
            Stage::Completed(_) => return Err(WorkflowError::AlreadyCompleted),
        }
        if self.source_hash.trim().is_empty() {
            return Err(WorkflowError::AssetHashRequired);
        }
        if self.recipient.trim().is_empty() {
            return Err(WorkflowError::RecipientRequired);
        }
        self.last_ticket += 1;
        self.stage = Stage::Submitting { ticket: self.last_ticket };
        Ok(self.last_ticket)
    }

    /// Record the receipt. Returns `false` for a stale ticket.
    pub fn complete(&mut self, ticket: u64, receipt: TransferReceipt) -> bool {
        if self.stage != (Stage::Submitting { ticket }) {
            return false;
        }
        self.stage = Stage::Completed(receipt);
        true
    }

    /// Return to `Editing` after a simulated failure, keeping the inputs.
    pub fn fail(&mut self, ticket: u64) -> bool {
        if self.stage != (Stage::Submitting { ticket }) {
            return false;
        }
        self.stage = Stage::Editing;
        true
    }

    /// "Transfer another": clear everything and start editing again.
    pub fn start_another(&mut self) {
        let last_ticket = self.last_ticket;
        *self = Self { last_ticket, ..Self::default() };
    }
}

#[must_use]
pub fn transferred_notice() -> Notice {
    Notice::success("Transfer Successful", "The asset has been transferred successfully.")
}
