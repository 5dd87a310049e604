//! Tool parameter schemas.
//!
//! Each struct is both the JSON schema advertised in `tools/list` and the
//! gate in front of its handler: rmcp deserializes call arguments into it
//! and answers `invalid_params` on mismatch, so handlers only ever see
//! well-typed input. Field doc comments become the schema descriptions.

use serde::Deserialize;

/// Parameters for `save_note`.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct SaveNoteRequest {
    /// Note title (used as filename)
    pub title: String,
    /// Markdown content of the note
    pub content: String,
}

/// Parameters for `read_note`.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ReadNoteRequest {
    /// Title of the note to read
    pub title: String,
}

/// Parameters for `get_weather`.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct WeatherRequest {
    /// City name (e.g. 'Orlando' or 'New York')
    pub location: String,
}
