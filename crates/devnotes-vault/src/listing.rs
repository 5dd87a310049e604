//! Summary lines for `list_notes`.

use std::path::Path;

use chrono::{DateTime, Local};

/// Local time rendering used in listings, e.g. `5/1/2024, 3:07:09 PM`.
const MODIFIED_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One qualifying entry in the store directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    /// Title recovered from the filename (separators become spaces).
    pub title: String,
    /// File name inside the store, including extension.
    pub filename: String,
    pub modified: DateTime<Local>,
}

impl NoteSummary {
    /// `- bug backlog  (bug-backlog.md)  — last modified: 5/1/2024, 3:07:09 PM`
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "- {}  ({})  — last modified: {}",
            self.title,
            self.filename,
            self.modified.format(MODIFIED_FORMAT)
        )
    }
}

/// Render a listing. An empty store yields a single informational line,
/// never an empty vector.
#[must_use]
pub fn render_listing(summaries: &[NoteSummary], store_dir: &Path) -> Vec<String> {
    if summaries.is_empty() {
        return vec![format!("No notes found in {}.", store_dir.display())];
    }
    summaries.iter().map(NoteSummary::to_line).collect()
}
