//! Kind → file → submit → result state machine shared by Upload and Verify.
//!
//! DESIGN
//! ======
//! Each stage carries exactly the data that is valid in it, so "a result
//! exists iff the phase is Completed" and "a file is never held without a
//! kind" hold by construction rather than by discipline.
//!
//! A submission is identified by a ticket. The simulated step finishes later
//! on a timer; if the user has changed kind or reset in the meantime the
//! ticket no longer matches and the late completion is dropped.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::state::asset::{AssetKind, FileInfo, FileRejection, check_file};
use crate::state::notify::Notice;

/// Coarse phase of a workflow, for rendering and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    SelectingKind,
    SelectingFile,
    Submitting,
    Completed,
}

/// Which view a page shows for a workflow. Submitting stays on the file
/// picker so the in-flight button state is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    KindPicker,
    FilePicker(AssetKind),
    Result,
}

/// Validation failures that block a transition. State is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("choose a file type first")]
    NoKindSelected,
    #[error("no file selected")]
    NoFileSelected,
    #[error(transparent)]
    Rejected(#[from] FileRejection),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("the workflow has already completed")]
    AlreadyCompleted,
    #[error("asset hash required")]
    AssetHashRequired,
    #[error("recipient ID required")]
    RecipientRequired,
}

impl WorkflowError {
    /// User-facing notice. `verb` completes "Please select a file to ...".
    #[must_use]
    pub fn notice(self, verb: &str) -> Notice {
        match self {
            Self::NoKindSelected => Notice::destructive("No file type selected", "Please choose a file type first."),
            Self::NoFileSelected => Notice::destructive("No file selected", format!("Please select a file to {verb}.")),
            Self::Rejected(rejection) => rejection.notice(),
            Self::AlreadySubmitting => Notice::destructive("Please wait", "A request is already in progress."),
            Self::AlreadyCompleted => Notice::destructive("Already complete", "Start a new request first."),
            Self::AssetHashRequired => Notice::destructive(
                "Asset hash required",
                "Please enter the hash of the asset you want to transfer.",
            ),
            Self::RecipientRequired => Notice::destructive(
                "Recipient ID required",
                "Please enter the ID of the user you want to transfer the asset to.",
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Stage<R> {
    SelectingKind,
    SelectingFile { kind: AssetKind, file: Option<FileInfo> },
    Submitting { kind: AssetKind, file: FileInfo, ticket: u64 },
    Completed { kind: AssetKind, file: FileInfo, result: R },
}

/// A page-scoped file workflow producing a result of type `R`.
#[derive(Clone, Debug, PartialEq)]
pub struct FileWorkflow<R> {
    stage: Stage<R>,
    last_ticket: u64,
}

impl<R> Default for FileWorkflow<R> {
    fn default() -> Self {
        Self { stage: Stage::SelectingKind, last_ticket: 0 }
    }
}

impl<R> FileWorkflow<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::SelectingKind => Phase::SelectingKind,
            Stage::SelectingFile { .. } => Phase::SelectingFile,
            Stage::Submitting { .. } => Phase::Submitting,
            Stage::Completed { .. } => Phase::Completed,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match &self.stage {
            Stage::SelectingKind => Screen::KindPicker,
            Stage::SelectingFile { kind, .. } | Stage::Submitting { kind, .. } => Screen::FilePicker(*kind),
            Stage::Completed { .. } => Screen::Result,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<AssetKind> {
        match &self.stage {
            Stage::SelectingKind => None,
            Stage::SelectingFile { kind, .. } | Stage::Submitting { kind, .. } | Stage::Completed { kind, .. } => {
                Some(*kind)
            }
        }
    }

    #[must_use]
    pub fn file(&self) -> Option<&FileInfo> {
        match &self.stage {
            Stage::SelectingKind => None,
            Stage::SelectingFile { file, .. } => file.as_ref(),
            Stage::Submitting { file, .. } | Stage::Completed { file, .. } => Some(file),
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&R> {
        match &self.stage {
            Stage::Completed { result, .. } => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.stage, Stage::Submitting { .. })
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.stage, Stage::SelectingFile { file: Some(_), .. })
    }

    /// Pick a kind. Always starts a fresh session for that kind, abandoning
    /// any held file, result or in-flight submission.
    pub fn choose_kind(&mut self, kind: AssetKind) {
        self.stage = Stage::SelectingFile { kind, file: None };
    }

    /// Go back to the kind picker.
    pub fn clear_kind(&mut self) {
        self.stage = Stage::SelectingKind;
    }

    /// Offer a picked file to the acceptance guard. On success the file
    /// replaces any held one; on rejection nothing changes.
    ///
    /// # Errors
    ///
    /// `NoKindSelected` before a kind is chosen, `Rejected` when the guard
    /// fails, `AlreadySubmitting` / `AlreadyCompleted` outside file selection.
    pub fn offer_file(&mut self, candidate: FileInfo) -> Result<(), WorkflowError> {
        match &mut self.stage {
            Stage::SelectingKind => Err(WorkflowError::NoKindSelected),
            Stage::SelectingFile { kind, file } => {
                check_file(*kind, &candidate)?;
                *file = Some(candidate);
                Ok(())
            }
            Stage::Submitting { .. } => Err(WorkflowError::AlreadySubmitting),
            Stage::Completed { .. } => Err(WorkflowError::AlreadyCompleted),
        }
    }

    /// Drop the held file ("select a different file").
    pub fn clear_file(&mut self) {
        if let Stage::SelectingFile { file, .. } = &mut self.stage {
            *file = None;
        }
    }

    /// Leave `SelectingFile` for `Submitting`, returning the submission ticket.
    ///
    /// # Errors
    ///
    /// `NoFileSelected` when no accepted file is held, `AlreadySubmitting`
    /// while a submission is in flight, `AlreadyCompleted` after completion.
    pub fn begin_submit(&mut self) -> Result<u64, WorkflowError> {
        let (kind, file) = match &self.stage {
            Stage::SelectingKind | Stage::SelectingFile { file: None, .. } => {
                return Err(WorkflowError::NoFileSelected);
            }
            Stage::Submitting { .. } => return Err(WorkflowError::AlreadySubmitting),
            Stage::Completed { .. } => return Err(WorkflowError::AlreadyCompleted),
            Stage::SelectingFile { kind, file: Some(file) } => (*kind, file.clone()),
        };
        self.last_ticket += 1;
        let ticket = self.last_ticket;
        self.stage = Stage::Submitting { kind, file, ticket };
        Ok(ticket)
    }

    /// Finish a submission. Returns `false` (and changes nothing) when the
    /// ticket is stale.
    pub fn complete(&mut self, ticket: u64, result: R) -> bool {
        match std::mem::replace(&mut self.stage, Stage::SelectingKind) {
            Stage::Submitting { kind, file, ticket: current } if current == ticket => {
                self.stage = Stage::Completed { kind, file, result };
                true
            }
            other => {
                self.stage = other;
                false
            }
        }
    }

    /// Abort a submission after a simulated failure, keeping kind and file.
    /// Returns `false` when the ticket is stale.
    pub fn fail(&mut self, ticket: u64) -> bool {
        match std::mem::replace(&mut self.stage, Stage::SelectingKind) {
            Stage::Submitting { kind, file, ticket: current } if current == ticket => {
                self.stage = Stage::SelectingFile { kind, file: Some(file) };
                true
            }
            other => {
                self.stage = other;
                false
            }
        }
    }

    /// "Upload/verify another": from `Completed` back to an empty
    /// `SelectingFile` for the same kind.
    pub fn start_another(&mut self) {
        if let Stage::Completed { kind, .. } = self.stage {
            self.stage = Stage::SelectingFile { kind, file: None };
        }
    }
}
