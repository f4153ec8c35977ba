//! Client configuration: environment first, command-line flags on top.

use std::time::Duration;

use stackflow::ClientConfig;

pub use stackflow::config::Error;

use crate::args::Args;

/// `ClientConfig::from_env` with `--api-url` and `--timeout` applied.
pub fn client_config(args: &Args) -> Result<ClientConfig, Error> {
    let mut config = ClientConfig::from_env()?;
    if let Some(ref url) = args.api_url {
        config.base_url = ClientConfig::new(url.as_str()).base_url;
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}
