//! Commands that only talk to the backend: uploads, documents, LLM node settings.

use std::io::Write;
use std::path::Path;

use stackflow::forms::UPLOADED;
use stackflow::{KnowledgeBaseForm, LlmConfig, LlmEngineForm, LlmField, StackApi};

use crate::args::LlmConfigAction;
use crate::config::Error;

/// Uploads through the knowledge-base form so the same checks apply as on the canvas.
pub async fn upload(api: &dyn StackApi, path: &Path, out: &mut dyn Write) -> Result<bool, Error> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| format!("not a file: {}", path.display()))?;
    let bytes = if filename.ends_with(".pdf") {
        std::fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?
    } else {
        Vec::new()
    };

    let mut form = KnowledgeBaseForm::new("knowledgeBase");
    form.upload(api, &filename, bytes).await;
    let status = form.status().unwrap_or_default();
    writeln!(out, "{}", status)?;
    Ok(status == UPLOADED)
}

pub async fn documents(
    api: &dyn StackApi,
    delete: Option<&str>,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    if let Some(filename) = delete {
        api.delete_document(filename).await?;
        writeln!(out, "Deleted {}", filename)?;
        return Ok(true);
    }
    let docs = api.list_documents().await?;
    if docs.is_empty() {
        writeln!(out, "No documents uploaded")?;
    }
    for doc in docs {
        writeln!(out, "{:<40} {:>8} chars", doc.filename, doc.text_length)?;
    }
    Ok(true)
}

fn print_config(config: &LlmConfig, out: &mut dyn Write) -> Result<(), Error> {
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}

pub async fn llm_config(
    api: &dyn StackApi,
    action: LlmConfigAction,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    match action {
        LlmConfigAction::Get { node_id } => {
            let mut form = LlmEngineForm::new(node_id);
            form.load(api).await;
            print_config(form.config(), out)?;
            Ok(true)
        }
        LlmConfigAction::Set {
            node_id,
            model,
            api_key,
            prompt,
            temperature,
            web_search,
            serp_api_key,
        } => {
            let mut form = LlmEngineForm::new(node_id);
            form.load(api).await;
            let edits = [
                model.map(LlmField::Model),
                api_key.map(LlmField::ApiKey),
                prompt.map(LlmField::Prompt),
                temperature.map(LlmField::Temperature),
                web_search.map(LlmField::WebSearchEnabled),
                serp_api_key.map(LlmField::SerpApiKey),
            ];
            for edit in edits.into_iter().flatten() {
                form.edit(edit);
            }
            let saved = form.save(api).await;
            if saved {
                writeln!(out, "Saved settings for {}", form.node_id())?;
                print_config(form.config(), out)?;
            } else {
                writeln!(out, "Could not save settings for {}", form.node_id())?;
            }
            Ok(saved)
        }
    }
}
