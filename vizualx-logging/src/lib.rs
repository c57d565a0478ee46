//! Logging setup for the Vizual X sync service
//!
//! All crates log through `tracing`; this crate installs the global
//! `tracing-subscriber` once, driven by the `logging` configuration domain.

pub mod init;

pub use init::{filter_directive, init_logging_from_config};
