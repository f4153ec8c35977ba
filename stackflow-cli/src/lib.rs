//! stackflow-cli library: the terminal front end behind the `stackflow` binary.
//!
//! Workflow files stand in for the canvas (`new`, `add`, `connect`, `move`, `remove`,
//! `show`); `build`, `ask`, `chat`, `upload`, `documents` and `llm-config` talk to the
//! backend at `STACKFLOW_API_URL` (or `--api-url`).
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let args = stackflow_cli::Args::parse_from(["stackflow", "build", "flow.json"]);
//! let ok = stackflow_cli::run(args, &mut std::io::stdin().lock(), &mut std::io::stdout()).await?;
//! ```

mod args;
mod commands;
mod config;

use std::io::{BufRead, Write};
use std::sync::Arc;

use stackflow::{ChatSession, Connection, HttpStackApi, StackApi};

pub use args::{Args, Command, LlmConfigAction};
pub use config::{client_config, Error};

/// Runs `args.command` against the backend configured by env and flags.
///
/// Returns `Ok(false)` when the command ran but its outcome was a failure.
pub async fn run(
    args: Args,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    let config = client_config(&args)?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "client config");
    let api: Arc<dyn StackApi> = Arc::new(HttpStackApi::new(config)?);
    execute(args.command, api, input, out).await
}

/// Runs one command against `api`.
pub async fn execute(
    command: Command,
    api: Arc<dyn StackApi>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    use commands::{backend, chat, workflow};

    match command {
        Command::Palette => workflow::palette(out),
        Command::New { out: target } => workflow::new_workflow(target.as_deref(), out),
        Command::Add { file, node_type, x, y } => workflow::add_node(&file, &node_type, x, y, out),
        Command::Connect {
            file,
            source,
            target,
            source_handle,
            target_handle,
        } => {
            let mut connection = Connection::new(source, target);
            if let Some(h) = source_handle {
                connection = connection.with_source_handle(h);
            }
            if let Some(h) = target_handle {
                connection = connection.with_target_handle(h);
            }
            workflow::connect(&file, connection, out)
        }
        Command::Move { file, id, x, y } => workflow::move_node(&file, &id, x, y, out),
        Command::Remove { file, id } => workflow::remove(&file, &id, out),
        Command::Show { file } => workflow::show(&file, out),
        Command::Build { file, offline } => {
            let api = (!offline).then_some(api.as_ref());
            workflow::build(api, &file, out).await
        }
        Command::Ask { query } => {
            let session = ChatSession::new(api);
            chat::ask(&session, &query.join(" "), out).await
        }
        Command::Chat => {
            let session = ChatSession::new(api);
            chat::chat(&session, input, out).await
        }
        Command::Upload { path } => backend::upload(api.as_ref(), &path, out).await,
        Command::Documents { delete } => {
            backend::documents(api.as_ref(), delete.as_deref(), out).await
        }
        Command::LlmConfig { action } => backend::llm_config(api.as_ref(), action, out).await,
    }
}

#[cfg(test)]
mod tests;
