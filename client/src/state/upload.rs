//! Upload session: register a file and receive its content hash.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::state::notify::Notice;
use crate::state::workflow::FileWorkflow;

/// Verb used in "Please select a file to ..." notices.
pub const UPLOAD_VERB: &str = "upload";

/// Upload workflow whose result is the minted content hash.
pub type UploadSession = FileWorkflow<String>;

impl UploadSession {
    /// Content hash of the registered asset, present only once completed.
    #[must_use]
    pub fn result_hash(&self) -> Option<&str> {
        self.result().map(String::as_str)
    }
}

#[must_use]
pub fn uploaded_notice() -> Notice {
    Notice::success("Asset uploaded successfully", "Your file has been secured on the blockchain")
}
