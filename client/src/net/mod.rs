//! Simulated network edges.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ledger` stands in for the blockchain registry and `wallet` wraps the
//! browser-injected wallet provider. Neither performs real network I/O.

pub mod ledger;
pub mod wallet;
