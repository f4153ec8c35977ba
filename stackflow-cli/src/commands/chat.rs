//! One-shot questions and the interactive chat loop.

use std::io::{BufRead, Write};

use stackflow::chat::THINKING;
use stackflow::{ChatMessage, ChatSession, Sender, SubmitOutcome};

use crate::config::Error;

fn print_message(message: &ChatMessage, out: &mut dyn Write) -> Result<(), Error> {
    let who = match message.sender {
        Sender::User => "You",
        Sender::Ai => "AI",
    };
    writeln!(out, "[{}] {}: {}", message.time_label(), who, message.text)?;
    Ok(())
}

pub async fn ask(session: &ChatSession, query: &str, out: &mut dyn Write) -> Result<bool, Error> {
    match session.submit(query).await {
        SubmitOutcome::Answered(reply) => {
            writeln!(out, "{}", reply.text)?;
            Ok(true)
        }
        SubmitOutcome::Empty | SubmitOutcome::Busy => Ok(false),
    }
}

/// Reads one query per line until `exit`, `quit` or end of input.
pub async fn chat(
    session: &ChatSession,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    for message in session.messages() {
        print_message(&message, out)?;
    }
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim_end_matches(&['\r', '\n'][..]);
        if matches!(query.trim(), "exit" | "quit") {
            break;
        }
        if query.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", THINKING)?;
        if let SubmitOutcome::Answered(reply) = session.submit(query).await {
            print_message(&reply, out)?;
        }
    }
    Ok(true)
}
