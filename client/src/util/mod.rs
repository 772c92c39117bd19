//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the formatting rules can be tested natively.

pub mod browser;
pub mod hex;
pub mod timefmt;
