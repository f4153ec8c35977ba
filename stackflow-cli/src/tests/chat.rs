//! `ask` and the interactive `chat` loop.

use std::sync::Arc;

use stackflow::api::{ApiError, SearchResponse};
use stackflow::chat::{GREETING, THINKING};
use stackflow::{MockStackApi, StackApi};

use super::run_with;
use crate::Command;

fn ask(words: &[&str]) -> Command {
    Command::Ask {
        query: words.iter().map(|w| w.to_string()).collect(),
    }
}

#[tokio::test]
async fn ask_prints_answer_for_joined_query() {
    let mock = Arc::new(MockStackApi::new().with_search_result("RAG adds retrieved context."));
    let api: Arc<dyn StackApi> = mock.clone();

    let (ok, out) = run_with(ask(&["what", "is", "RAG?"]), api, "").await;
    assert!(ok.unwrap());
    assert_eq!(out.trim(), "RAG adds retrieved context.");
    assert_eq!(mock.queries(), vec!["what is RAG?".to_string()]);
}

#[tokio::test]
async fn ask_blank_query_sends_nothing() {
    let mock = Arc::new(MockStackApi::new());
    let api: Arc<dyn StackApi> = mock.clone();
    let (ok, out) = run_with(ask(&["  "]), api, "").await;
    assert!(!ok.unwrap());
    assert!(out.is_empty());
    assert_eq!(mock.search_calls(), 0);
}

/// **Scenario**: a backend failure is answered with the apology, not an error exit.
#[tokio::test]
async fn ask_backend_failure_prints_apology() {
    let api: Arc<dyn StackApi> = Arc::new(MockStackApi::new().with_search_response(
        SearchResponse {
            status: "error".into(),
            detail: Some("LLM API key not configured".into()),
            ..Default::default()
        },
    ));
    let (ok, out) = run_with(ask(&["hi"]), api, "").await;
    assert!(ok.unwrap());
    assert_eq!(
        out.trim(),
        "Sorry, I couldn't process your request. Error: LLM API key not configured"
    );
}

#[tokio::test]
async fn ask_transport_error_prints_apology() {
    let api: Arc<dyn StackApi> = Arc::new(
        MockStackApi::new().with_search_error(ApiError::Transport("connection refused".into())),
    );
    let (_, out) = run_with(ask(&["hi"]), api, "").await;
    assert!(out.contains("Error: connection refused"));
}

/// **Scenario**: the loop greets, skips blank lines and stops at `exit`.
#[tokio::test]
async fn chat_loop_until_exit() {
    let mock = Arc::new(MockStackApi::new().with_search_result("pong"));
    let api: Arc<dyn StackApi> = mock.clone();

    let (ok, out) = run_with(Command::Chat, api, "ping\n\n  \nexit\nnever sent\n").await;
    assert!(ok.unwrap());
    assert_eq!(mock.queries(), vec!["ping".to_string()]);

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].ends_with(&format!("AI: {}", GREETING)));
    assert!(out.contains(THINKING));
    assert!(out.contains("AI: pong"));
    assert_eq!(out.matches(THINKING).count(), 1);
}

#[tokio::test]
async fn chat_stops_at_end_of_input() {
    let mock = Arc::new(MockStackApi::new().with_search_result("ok"));
    let api: Arc<dyn StackApi> = mock.clone();

    let (ok, _) = run_with(Command::Chat, api, "first\r\nsecond").await;
    assert!(ok.unwrap());
    assert_eq!(mock.queries(), vec!["first".to_string(), "second".to_string()]);
}
