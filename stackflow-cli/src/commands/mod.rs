//! Subcommand implementations. Each returns `Ok(true)` when the action succeeded and
//! `Ok(false)` when it ran but the outcome was a failure (the binary then exits 1).

pub mod backend;
pub mod chat;
pub mod workflow;
