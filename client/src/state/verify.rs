//! Verification session: check a file against the (mocked) registry.
//!
//! The outcome is drawn uniformly at random by the simulated ledger. There is
//! no real comparison against registered content.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use time::OffsetDateTime;

use crate::state::notify::Notice;
use crate::state::workflow::FileWorkflow;

/// Verb used in "Please select a file to ..." notices.
pub const VERIFY_VERB: &str = "verify";

/// Shown under a Modified verdict.
pub const MODIFICATION_HINTS: [&str; 4] = [
    "The file has been edited or altered",
    "Image data has been manipulated",
    "Metadata has been changed",
    "The file is a deepfake or AI-generated variant",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Authentic,
    Modified,
    NotFound,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Authentic, Outcome::Modified, Outcome::NotFound];

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Authentic => "Authentic Asset",
            Self::Modified => "Modified Asset Detected",
            Self::NotFound => "Asset Not Found",
        }
    }

    #[must_use]
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Authentic => "This digital asset is authentic and registered on the blockchain.",
            Self::Modified => "This asset appears to be modified from the original registered version.",
            Self::NotFound => "No matching asset was found on the blockchain.",
        }
    }
}

/// Registry details reported for an authentic asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDetails {
    pub owner: String,
    pub registered_at: OffsetDateTime,
    pub last_verified_at: OffsetDateTime,
    pub content_hash: String,
}

/// Result of a verification. Details exist only for `Authentic`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Authentic(AssetDetails),
    Modified,
    NotFound,
}

impl Verdict {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Authentic(_) => Outcome::Authentic,
            Self::Modified => Outcome::Modified,
            Self::NotFound => Outcome::NotFound,
        }
    }

    #[must_use]
    pub fn details(&self) -> Option<&AssetDetails> {
        match self {
            Self::Authentic(details) => Some(details),
            Self::Modified | Self::NotFound => None,
        }
    }

    /// Completion notice; only an authentic verdict is non-destructive.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Authentic(_) => Notice::success(
                "Verification Complete",
                "The file is authentic and registered on the blockchain.",
            ),
            Self::Modified => Notice::destructive(
                "Verification Complete",
                "This file appears to be modified from the original.",
            ),
            Self::NotFound => {
                Notice::destructive("Verification Complete", "No matching file found on the blockchain.")
            }
        }
    }
}

/// Verify workflow whose result is a verdict.
pub type VerificationSession = FileWorkflow<Verdict>;

impl VerificationSession {
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.result().map(Verdict::outcome)
    }

    #[must_use]
    pub fn details(&self) -> Option<&AssetDetails> {
        self.result().and_then(Verdict::details)
    }
}
