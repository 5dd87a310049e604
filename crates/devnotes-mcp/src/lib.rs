//! # devnotes-mcp
//!
//! MCP (Model Context Protocol) server for the dev-notes store.
//!
//! Exposes four tools:
//! - `save_note`: Write a note, overwriting any note with the same slug
//! - `list_notes`: List notes with last-modified times
//! - `read_note`: Read a note by title
//! - `get_weather`: Current conditions for a location

pub mod envelope;
pub mod params;
pub mod tools;

pub use envelope::ToolOutcome;
pub use tools::DevNotesService;
