//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the shared pieces of the upload, verify
//! and assets screens. They read the wallet and notification contexts; any
//! workflow state arrives through props.

pub mod asset_card;
pub mod file_upload_card;
pub mod kind_picker;
pub mod navbar;
pub mod page_transition;
pub mod scene_host;
pub mod toaster;
pub mod wallet_button;
