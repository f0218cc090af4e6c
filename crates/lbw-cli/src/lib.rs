//! lbw-cli library root.
//!
//! Re-exports the command and config modules so integration tests can
//! drive them without going through argument parsing.

pub mod commands;
pub mod config;
