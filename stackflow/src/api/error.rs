//! Client-side API error.
//!
//! Every variant renders to the plain message the front end interpolates into its
//! user-visible strings (chat apology, build alert, upload status).

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, timeout, bad URL).
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Non-2xx response on an endpoint where only the HTTP status decides success.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message_for_transport() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn display_status_includes_code_and_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: "Missing nodeId or config".into(),
        };
        assert_eq!(err.to_string(), "HTTP 400: Missing nodeId or config");
    }
}
