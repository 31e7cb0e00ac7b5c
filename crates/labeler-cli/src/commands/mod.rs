//! Command implementations for labeler-cli

pub mod apply;
pub mod resolve;

pub use apply::{ApplyArgs, run_apply};
pub use resolve::run_resolve;
