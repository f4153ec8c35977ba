//! Chat session: an append-only log of user and AI messages backed by the search endpoint.
//!
//! At most one request is outstanding per session. `submit` takes `&self`, so a session can
//! be shared between an input loop and a renderer; a submission made while another is in
//! flight returns [`SubmitOutcome::Busy`] without touching the log or the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local};

use crate::api::StackApi;

/// First message of every session.
pub const GREETING: &str = "Hello! I'm your AI assistant. Ask me anything!";

/// Indicator text shown while a reply is pending.
pub const THINKING: &str = "🤔 Thinking...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Sequential, starting at 1 for the greeting.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Wall-clock time as shown next to the message.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// What a call to [`ChatSession::submit`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Input was empty or whitespace; nothing happened.
    Empty,
    /// Another request is still pending; nothing happened.
    Busy,
    /// The exchange completed; carries the AI message that was appended.
    Answered(ChatMessage),
}

/// Text of the AI message appended when a query fails.
pub fn apology(reason: &str) -> String {
    format!("Sorry, I couldn't process your request. Error: {}", reason)
}

/// Resets the loading flag when the exchange ends, even if the future is dropped mid-way.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ChatSession {
    api: Arc<dyn StackApi>,
    messages: Mutex<Vec<ChatMessage>>,
    loading: AtomicBool,
}

impl ChatSession {
    /// New session seeded with the greeting.
    pub fn new(api: Arc<dyn StackApi>) -> Self {
        let session = Self {
            api,
            messages: Mutex::new(Vec::new()),
            loading: AtomicBool::new(false),
        };
        session.append(Sender::Ai, GREETING.to_string());
        session
    }

    fn log(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn append(&self, sender: Sender, text: String) -> ChatMessage {
        let mut log = self.log();
        let message = ChatMessage {
            id: log.len() as u64 + 1,
            sender,
            text,
            timestamp: Local::now(),
        };
        log.push(message.clone());
        message
    }

    /// Snapshot of the log, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// The pending indicator, while a request is in flight.
    pub fn thinking(&self) -> Option<&'static str> {
        self.is_loading().then_some(THINKING)
    }

    /// Sends `input` as a query and appends exactly one AI reply.
    ///
    /// The user message is appended before the request is made. Failures, including a
    /// response whose `status` is not `"success"`, become an apology message.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::Empty;
        }
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("chat submission ignored while a request is pending");
            return SubmitOutcome::Busy;
        }
        let _loading = LoadingGuard(&self.loading);

        self.append(Sender::User, input.to_string());
        let reply = self.ask(input).await;
        SubmitOutcome::Answered(self.append(Sender::Ai, reply))
    }

    async fn ask(&self, query: &str) -> String {
        match self.api.search(query).await {
            Ok(response) if response.is_success() => response.result.unwrap_or_default(),
            Ok(response) => {
                let reason = response
                    .detail
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| "API call failed".to_string());
                tracing::warn!(reason = %reason, "search returned a failure status");
                apology(&reason)
            }
            Err(e) => {
                tracing::warn!(error = %e, "search request failed");
                apology(&e.to_string())
            }
        }
    }
}
