//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stackflow")]
#[command(about = "Build AI workflow stacks, validate them on the backend and chat with them")]
pub struct Args {
    /// Backend base URL (overrides STACKFLOW_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides STACKFLOW_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the components that can be added to a workflow
    Palette,

    /// Write a new workflow holding only the User Query node
    New {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Add a component to a workflow file
    Add {
        file: PathBuf,
        /// userQuery, knowledgeBase, llmEngine or output
        node_type: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
    },

    /// Connect two nodes
    Connect {
        file: PathBuf,
        source: String,
        target: String,
        #[arg(long)]
        source_handle: Option<String>,
        /// e.g. `query` or `context` on an LLM engine
        #[arg(long)]
        target_handle: Option<String>,
    },

    /// Move a node
    Move {
        file: PathBuf,
        id: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Remove a node (with its edges) or an edge
    Remove { file: PathBuf, id: String },

    /// Print nodes, edges and stack status
    Show { file: PathBuf },

    /// Validate the workflow and print the build result
    Build {
        file: PathBuf,
        /// Apply the validation rules locally instead of calling the backend
        #[arg(long)]
        offline: bool,
    },

    /// Ask one question
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Interactive chat; `exit` or end of input quits
    Chat,

    /// Upload a PDF to the knowledge base
    Upload { path: PathBuf },

    /// List uploaded documents
    Documents {
        /// Delete this document instead of listing
        #[arg(long, value_name = "FILENAME")]
        delete: Option<String>,
    },

    /// Show or change the saved settings of an LLM engine node
    LlmConfig {
        #[command(subcommand)]
        action: LlmConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum LlmConfigAction {
    /// Print the stored settings (defaults when nothing is stored)
    Get { node_id: String },

    /// Load, edit and save the settings
    Set {
        node_id: String,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        prompt: Option<String>,
        /// Clamped to [0, 1]
        #[arg(long)]
        temperature: Option<f32>,
        #[arg(long)]
        web_search: Option<bool>,
        #[arg(long)]
        serp_api_key: Option<String>,
    },
}
