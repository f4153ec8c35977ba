//! "Build Stack" action: send the workflow for validation and render the result.
//!
//! The outcome text is what the front end shows in its blocking alert. Three templates:
//! success, application-level failure (`status` other than `"success"`), and transport or
//! decode failure.

use crate::api::{ApiError, StackApi, ValidationResponse};
use crate::graph::Workflow;

/// Result of a build attempt as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOutcome {
    pub success: bool,
    pub text: String,
}

impl BuildOutcome {
    pub fn from_response(response: &ValidationResponse) -> Self {
        if response.is_success() {
            Self {
                success: true,
                text: format!(
                    "✅ Stack Built Successfully!\n\n{}\n\nWorkflow: {}",
                    response.message, response.workflow_description
                ),
            }
        } else {
            Self {
                success: false,
                text: format!(
                    "❌ Cannot Build Stack!\n\n{}\n\nSuggestion: {}",
                    response.message,
                    response.suggestion.as_deref().unwrap_or("")
                ),
            }
        }
    }

    pub fn from_error(error: &ApiError) -> Self {
        Self {
            success: false,
            text: format!("❌ Build Stack Failed!\n\nError: {}", error),
        }
    }
}

/// Serializes `workflow` as-is, validates it through `api` and renders the outcome.
pub async fn build_stack(api: &dyn StackApi, workflow: &Workflow) -> BuildOutcome {
    match api.validate_workflow(workflow).await {
        Ok(response) => {
            tracing::debug!(status = %response.status, "workflow validated");
            BuildOutcome::from_response(&response)
        }
        Err(e) => {
            tracing::warn!(error = %e, "workflow validation request failed");
            BuildOutcome::from_error(&e)
        }
    }
}
