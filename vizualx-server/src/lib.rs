//! Vizual X Sync Server
//!
//! Wires configuration, logging and the sync service into the HTTP server,
//! plus a one-shot `check` mode for scripts.

pub mod check;
pub mod startup;

// Re-export main components
pub use check::{run_check, CheckReport};
pub use startup::Server;
