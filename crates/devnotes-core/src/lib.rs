//! # devnotes-core
//!
//! Foundational types shared by every dev-notes crate:
//! - [`slug`] — title to filename derivation
//! - [`Config`] — store directory and weather endpoint, fixed at startup
//! - Error hierarchy ([`DevNotesError`])

pub mod config;
pub mod error;
pub mod slug;

pub use config::Config;
pub use error::{DevNotesError, Result};
pub use slug::{display_title, slugify};
