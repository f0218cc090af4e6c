//! lbw-core
//!
//! Shared domain vocabulary for LBW Brain Wellness: assessment type tags and
//! the completed-assessment record handed to the persistence layer.
//! No scoring logic lives here.

pub mod error;
pub mod models;
