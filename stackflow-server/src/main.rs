//! stackflow backend binary.
//!
//! Configure via env (see `ServerConfig::from_env`): LISTEN, GEMINI_API_KEY, LLM_API_BASE,
//! LLM_MODEL, CORS_ORIGINS, MAX_UPLOAD_MB, LOG_FILE. Loads .env with dotenv.

use std::sync::Arc;

use stackflow_server::{app, AppState, ServerConfig};
use tracing::info;

/// `.env` from the working directory, else from its parent (the workspace root when started
/// from `stackflow-server/`).
fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    let parent_env = std::env::current_dir()
        .ok()
        .and_then(|cwd| cwd.parent().map(|p| p.join(".env")))
        .filter(|path| path.is_file());
    if let Some(path) = parent_env {
        if let Err(e) = dotenv::from_path(&path) {
            eprintln!("ignoring {}: {}", path.display(), e);
        }
    }
}

/// `RUST_LOG` or the crate-level default, applied to every sink.
fn log_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,stackflow_server=debug,stackflow=debug")
    })
}

/// Stdout always; `LOG_FILE` adds an appending plain-text sink.
fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer;

    let log_file = std::env::var("LOG_FILE").ok();
    let file_layer = match log_file.as_deref() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(log_filter()),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(log_filter()))
        .with(file_layer)
        .init();
    if let Some(path) = log_file {
        info!(path = %path, "logging to file");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    load_dotenv();
    init_tracing()?;

    let config = ServerConfig::from_env()?;
    if config.llm_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; /api/search will answer 500");
    }
    info!(
        model = %config.llm_model,
        base_url = %config.llm_api_base,
        cors_origins = ?config.cors_origins,
        "config loaded"
    );

    let state = Arc::new(AppState::from_config(&config));
    let router = app(state, &config);

    info!("listening on http://{}", config.listen);
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
