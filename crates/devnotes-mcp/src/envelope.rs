//! Uniform result envelope returned by every tool.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use devnotes_core::error::{DevNotesError, Result};

/// What a tool hands back to the caller: one text block, flagged as an
/// error or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Success(String),
    Failure(String),
}

impl ToolOutcome {
    /// Fold an accessor result into an outcome. Recoverable errors become
    /// [`ToolOutcome::Failure`]; anything else stays an error.
    ///
    /// # Errors
    ///
    /// Returns the original error when it is not recoverable.
    pub fn recover(result: Result<String>) -> Result<Self> {
        match result {
            Ok(text) => Ok(Self::Success(text)),
            Err(e) if e.is_recoverable() => Ok(Self::Failure(e.to_string())),
            Err(e) => Err(e),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl From<ToolOutcome> for CallToolResult {
    fn from(outcome: ToolOutcome) -> Self {
        match outcome {
            ToolOutcome::Success(text) => CallToolResult::success(vec![Content::text(text)]),
            ToolOutcome::Failure(text) => CallToolResult::error(vec![Content::text(text)]),
        }
    }
}

/// Convert a handler's result into the protocol response. Fatal errors
/// surface as an MCP internal error.
///
/// # Errors
///
/// Returns [`McpError`] for non-recoverable failures.
pub fn respond(result: Result<ToolOutcome>) -> std::result::Result<CallToolResult, McpError> {
    result
        .map(CallToolResult::from)
        .map_err(|e: DevNotesError| {
            tracing::debug!(error = %e, "tool failed");
            McpError::internal_error(e.to_string(), None)
        })
}
