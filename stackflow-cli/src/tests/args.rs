//! Argument parsing.

use clap::Parser;

use crate::{Args, Command, LlmConfigAction};

/// **Scenario**: global flags are accepted after the subcommand.
#[test]
fn global_flags_after_subcommand() {
    let args = Args::try_parse_from([
        "stackflow",
        "build",
        "flow.json",
        "--offline",
        "--api-url",
        "http://10.0.0.5:8000",
        "-v",
    ])
    .unwrap();
    assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.5:8000"));
    assert!(args.verbose);
    assert_eq!(
        args.command,
        Command::Build {
            file: "flow.json".into(),
            offline: true
        }
    );
}

#[test]
fn ask_joins_trailing_words() {
    let args = Args::try_parse_from(["stackflow", "ask", "what", "is", "RAG?"]).unwrap();
    assert_eq!(
        args.command,
        Command::Ask {
            query: vec!["what".into(), "is".into(), "RAG?".into()]
        }
    );
}

#[test]
fn ask_requires_a_query() {
    assert!(Args::try_parse_from(["stackflow", "ask"]).is_err());
}

#[test]
fn move_accepts_negative_coordinates() {
    let args = Args::try_parse_from(["stackflow", "move", "f.json", "1", "-40", "12.5"]).unwrap();
    assert_eq!(
        args.command,
        Command::Move {
            file: "f.json".into(),
            id: "1".into(),
            x: -40.0,
            y: 12.5
        }
    );
}

#[test]
fn llm_config_set_parses_fields() {
    let args = Args::try_parse_from([
        "stackflow",
        "llm-config",
        "set",
        "llmEngine-2",
        "--temperature",
        "0.3",
        "--web-search",
        "false",
    ])
    .unwrap();
    assert_eq!(
        args.command,
        Command::LlmConfig {
            action: LlmConfigAction::Set {
                node_id: "llmEngine-2".into(),
                model: None,
                api_key: None,
                prompt: None,
                temperature: Some(0.3),
                web_search: Some(false),
                serp_api_key: None,
            }
        }
    );
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Args::try_parse_from(["stackflow", "deploy"]).is_err());
}
