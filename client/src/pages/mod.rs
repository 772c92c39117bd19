//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped session and delegates rendering details
//! to `components`. Only the wallet account and the notification queue are
//! shared between pages.

pub mod assets;
pub mod home;
pub mod landing;
pub mod not_found;
pub mod profile;
pub mod transfer;
pub mod upload;
pub mod verify;
