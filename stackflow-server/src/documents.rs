//! Uploaded documents: text extraction and the in-memory store keyed by filename.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use stackflow::api::DocumentSummary;

/// Characters of each document included in a search prompt.
pub const CONTEXT_CHARS: usize = 2000;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ExtractError(pub String);

/// Turns an uploaded file into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Extracts the text of every page with lopdf, one page per line block.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractError(e.to_string()))?;
        let mut text = String::new();
        for page in doc.get_pages().keys() {
            let page_text = doc
                .extract_text(&[*page])
                .map_err(|e| ExtractError(e.to_string()))?;
            text.push_str(&page_text);
            text.push('\n');
        }
        Ok(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredDocument {
    pub filename: String,
    pub text: String,
    seq: u64,
}

impl StoredDocument {
    /// Length in characters.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }

    /// Leading part of the text used as search context.
    pub fn excerpt(&self) -> String {
        self.text.chars().take(CONTEXT_CHARS).collect()
    }
}

/// Documents by filename. Listing follows first-upload order; re-uploading a filename
/// replaces its text in place.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: DashMap<String, StoredDocument>,
    next_seq: AtomicU64,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` under `filename`; returns the text length in characters.
    pub fn insert(&self, filename: &str, text: String) -> usize {
        let mut entry = self
            .docs
            .entry(filename.to_string())
            .or_insert_with(|| StoredDocument {
                filename: filename.to_string(),
                text: String::new(),
                seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            });
        entry.text = text;
        entry.text_length()
    }

    pub fn remove(&self, filename: &str) -> bool {
        self.docs.remove(filename).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// All documents in upload order.
    pub fn documents(&self) -> Vec<StoredDocument> {
        let mut docs: Vec<StoredDocument> = self.docs.iter().map(|e| e.value().clone()).collect();
        docs.sort_by_key(|d| d.seq);
        docs
    }

    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.documents()
            .into_iter()
            .map(|d| DocumentSummary {
                text_length: d.text_length(),
                filename: d.filename,
            })
            .collect()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.documents().into_iter().map(|d| d.filename).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_extraction() {
        assert!(PdfTextExtractor.extract(b"definitely not a pdf").is_err());
    }

    /// **Scenario**: listing keeps first-upload order, re-upload replaces text in place.
    #[test]
    fn listing_keeps_upload_order() {
        let store = DocumentStore::new();
        store.insert("b.pdf", "bbb".into());
        store.insert("a.pdf", "a".into());
        store.insert("b.pdf", "bb".into());
        assert_eq!(store.filenames(), vec!["b.pdf", "a.pdf"]);
        assert_eq!(
            store.summaries(),
            vec![
                DocumentSummary {
                    filename: "b.pdf".into(),
                    text_length: 2
                },
                DocumentSummary {
                    filename: "a.pdf".into(),
                    text_length: 1
                },
            ]
        );
    }

    #[test]
    fn remove_reports_presence() {
        let store = DocumentStore::new();
        store.insert("a.pdf", "x".into());
        assert!(store.remove("a.pdf"));
        assert!(!store.remove("a.pdf"));
        assert!(store.is_empty());
    }

    #[test]
    fn excerpt_counts_characters() {
        let store = DocumentStore::new();
        let text: String = "é".repeat(CONTEXT_CHARS + 10);
        assert_eq!(store.insert("e.pdf", text), CONTEXT_CHARS + 10);
        let doc = &store.documents()[0];
        assert_eq!(doc.excerpt().chars().count(), CONTEXT_CHARS);
    }
}
