//! `stackflow` binary: parse arguments, run the command, exit 1 when it did not succeed.

use clap::Parser;
use stackflow_cli::{run, Args};

/// `.env` from the working directory, else from its parent.
fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| cwd.parent().map(|p| p.join(".env")))
        .filter(|path| path.is_file())
    {
        let _ = dotenv::from_path(path);
    }
}

/// Logs to stderr so command output on stdout stays clean. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,stackflow=debug,stackflow_cli=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    load_dotenv();
    init_tracing(args.verbose);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    match run(args, &mut input, &mut out).await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
