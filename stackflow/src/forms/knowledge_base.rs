//! Knowledge-base form: embedding model choice and PDF upload.

use crate::api::StackApi;
use crate::graph::{GraphError, Node, NodeKind, NodeType, Workflow, DEFAULT_EMBEDDING_MODEL};

/// Status after picking a file that is not a PDF.
pub const PDF_ONLY: &str = "Only PDF files are supported";
pub const UPLOADING: &str = "Uploading...";
pub const UPLOADED: &str = "✅ Uploaded successfully!";

#[derive(Clone, Debug)]
pub struct KnowledgeBaseForm {
    node_id: String,
    embedding_model: String,
    uploaded_file: Option<String>,
    status: Option<String>,
    uploading: bool,
}

impl KnowledgeBaseForm {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            uploaded_file: None,
            status: None,
            uploading: false,
        }
    }

    /// Form over a `knowledgeBase` node; `None` for other node types.
    pub fn for_node(node: &Node) -> Option<Self> {
        match &node.kind {
            NodeKind::KnowledgeBase(data) => Some(Self {
                embedding_model: data.embedding_model.clone(),
                uploaded_file: data.uploaded_file.clone(),
                ..Self::new(&node.id)
            }),
            _ => None,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    pub fn set_embedding_model(&mut self, model: impl Into<String>) {
        self.embedding_model = model.into();
    }

    /// Name of the last successfully uploaded file.
    pub fn uploaded_file(&self) -> Option<&str> {
        self.uploaded_file.as_deref()
    }

    /// Status line under the upload control.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn uploading(&self) -> bool {
        self.uploading
    }

    /// Uploads one file. Names not ending in `.pdf` are rejected without a request.
    pub async fn upload(&mut self, api: &dyn StackApi, filename: &str, bytes: Vec<u8>) {
        if !filename.ends_with(".pdf") {
            tracing::debug!(filename, "upload rejected: not a pdf");
            self.status = Some(PDF_ONLY.to_string());
            return;
        }

        self.uploading = true;
        self.status = Some(UPLOADING.to_string());
        let status = match api.upload_document(filename, bytes).await {
            Ok(response) if response.is_success() => {
                self.uploaded_file = Some(filename.to_string());
                UPLOADED.to_string()
            }
            Ok(response) => {
                let detail = response
                    .detail
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| "Upload failed".to_string());
                tracing::warn!(filename, detail = %detail, "upload rejected by backend");
                format!("❌ {}", detail)
            }
            Err(e) => {
                tracing::warn!(filename, error = %e, "upload failed");
                format!("❌ Upload error: {}", e)
            }
        };
        self.status = Some(status);
        self.uploading = false;
    }

    /// Writes the embedding model and uploaded file back into the node of the same id.
    pub fn apply(&self, workflow: &mut Workflow) -> Result<(), GraphError> {
        if let NodeKind::KnowledgeBase(data) =
            super::node_kind_mut(workflow, &self.node_id, NodeType::KnowledgeBase)?
        {
            data.embedding_model = self.embedding_model.clone();
            data.uploaded_file = self.uploaded_file.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockStackApi, UploadResponse};

    /// **Scenario**: `report.txt` is rejected locally; no request is made.
    #[tokio::test]
    async fn non_pdf_is_rejected_without_request() {
        let api = MockStackApi::new();
        let mut form = KnowledgeBaseForm::new("knowledgeBase-2");
        form.upload(&api, "report.txt", b"hello".to_vec()).await;
        assert_eq!(form.status(), Some(PDF_ONLY));
        assert_eq!(form.uploaded_file(), None);
        assert_eq!(api.upload_calls(), 0);
    }

    /// **Scenario**: `report.pdf` is posted once and retained as the uploaded file.
    #[tokio::test]
    async fn pdf_upload_posts_once_and_keeps_filename() {
        let api = MockStackApi::new();
        let mut form = KnowledgeBaseForm::new("knowledgeBase-2");
        form.upload(&api, "report.pdf", b"%PDF-1.4".to_vec()).await;
        assert_eq!(api.uploads(), vec![("report.pdf".to_string(), 8)]);
        assert_eq!(form.uploaded_file(), Some("report.pdf"));
        assert_eq!(form.status(), Some(UPLOADED));
        assert!(!form.uploading());
    }

    #[tokio::test]
    async fn failure_status_shows_detail_or_fallback() {
        let api = MockStackApi::new().with_upload_response(UploadResponse {
            detail: Some("Could not extract text from PDF".into()),
            ..Default::default()
        });
        let mut form = KnowledgeBaseForm::new("kb");
        form.upload(&api, "scan.pdf", vec![1, 2, 3]).await;
        assert_eq!(form.status(), Some("❌ Could not extract text from PDF"));
        assert_eq!(form.uploaded_file(), None);

        let api = MockStackApi::new().with_upload_response(UploadResponse {
            status: "error".into(),
            ..Default::default()
        });
        form.upload(&api, "scan.pdf", vec![1]).await;
        assert_eq!(form.status(), Some("❌ Upload failed"));
    }

    #[tokio::test]
    async fn transport_failure_shows_upload_error() {
        let api = MockStackApi::new().with_upload_error(ApiError::Transport("reset".into()));
        let mut form = KnowledgeBaseForm::new("kb");
        form.upload(&api, "a.pdf", vec![]).await;
        assert_eq!(form.status(), Some("❌ Upload error: reset"));
        assert!(!form.uploading());
    }

    #[tokio::test]
    async fn apply_writes_uploaded_file_into_node() {
        use crate::graph::{CanvasTransform, DropEvent, ScreenPoint};

        let mut wf = Workflow::starter();
        let id = wf
            .drop_node(
                &DropEvent::new(NodeType::KnowledgeBase, ScreenPoint::new(10.0, 10.0)),
                &CanvasTransform::default(),
            )
            .id
            .clone();
        let mut form = KnowledgeBaseForm::for_node(wf.node(&id).unwrap()).unwrap();
        assert_eq!(form.embedding_model(), DEFAULT_EMBEDDING_MODEL);
        form.upload(&MockStackApi::new(), "report.pdf", vec![0]).await;
        form.apply(&mut wf).unwrap();
        match &wf.node(&id).unwrap().kind {
            NodeKind::KnowledgeBase(d) => {
                assert_eq!(d.uploaded_file.as_deref(), Some("report.pdf"))
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
