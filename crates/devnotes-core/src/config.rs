//! Startup configuration.
//!
//! Nothing here is read from flags, environment, or files. [`Config`] is
//! built once from the constants below and handed to each accessor, which
//! lets tests swap in a temporary directory and a mock weather endpoint.

use std::path::{Path, PathBuf};

use crate::error::{DevNotesError, Result};

/// Directory under the user's home that holds all notes.
pub const NOTES_DIR_NAME: &str = "dev-notes";

/// Extension appended to every note slug.
pub const NOTE_EXTENSION: &str = ".md";

/// Weather provider base URL. Requests go to `<base>/<location>?format=j1`.
pub const WEATHER_BASE_URL: &str = "https://wttr.in";

/// Name advertised to MCP clients.
pub const SERVER_NAME: &str = "dev-notes";

/// Resolved locations of the two external resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `<slug>.md` files.
    pub notes_dir: PathBuf,
    /// Weather endpoint base, without trailing slash.
    pub weather_base_url: String,
}

impl Config {
    /// Build a config rooted at an explicit notes directory, using the
    /// production weather endpoint.
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
            weather_base_url: WEATHER_BASE_URL.to_string(),
        }
    }

    /// `~/dev-notes` and the production weather endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DevNotesError::Io`] if the home directory cannot be determined.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            DevNotesError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "cannot determine home directory",
            ))
        })?;
        Ok(Self::new(home.join(NOTES_DIR_NAME)))
    }

    /// Replace the weather endpoint base.
    #[must_use]
    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }
}
