//! Unit tests for stackflow-cli, organized by command group.
//!
//! Backend commands run against `MockStackApi`; workflow files live in temp dirs.

mod args;
mod chat;

use std::io::Cursor;
use std::sync::Arc;

use stackflow::{MockStackApi, StackApi};

use crate::{execute, Command, Error};

/// Runs `command` against `api` with empty stdin; returns the outcome and captured stdout.
async fn run_with(
    command: Command,
    api: Arc<dyn StackApi>,
    stdin: &str,
) -> (Result<bool, Error>, String) {
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    let result = execute(command, api, &mut input, &mut out).await;
    (result, String::from_utf8_lossy(&out).into_owned())
}

/// Same as [`run_with`] with a fresh mock that must not be needed.
async fn run_local(command: Command) -> (Result<bool, Error>, String) {
    run_with(command, Arc::new(MockStackApi::new()), "").await
}
