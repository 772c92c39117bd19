//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! Page-scoped workflow sessions (`upload`, `verify`, `transfer`) are plain
//! state machines wrapped in `RwSignal` by their page. `wallet` and `notify`
//! are the only app-level contexts.

pub mod asset;
pub mod catalog;
pub mod notify;
pub mod profile;
pub mod transfer;
pub mod upload;
pub mod verify;
pub mod wallet;
pub mod workflow;
