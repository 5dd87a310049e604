//! Filesystem accessor for the notes directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::fs;

use devnotes_core::config::NOTE_EXTENSION;
use devnotes_core::error::{DevNotesError, Result};
use devnotes_core::{display_title, slugify};

use crate::listing::{render_listing, NoteSummary};

/// Handle on the notes directory. Holds only the path; every call goes to
/// the filesystem.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The notes directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a note with this title lives at.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.root.join(slugify(title))
    }

    /// Create the notes directory and any missing parents. Succeeds if it
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns [`DevNotesError::Store`] if the directory cannot be created.
    pub async fn ensure_store(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| DevNotesError::Store {
                path: self.root.clone(),
                source,
            })
    }

    /// Write `content` to the note derived from `title`, replacing any
    /// existing note with the same slug. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`DevNotesError::Store`] if the directory cannot be created,
    /// [`DevNotesError::Io`] if the write fails.
    pub async fn save(&self, title: &str, content: &str) -> Result<PathBuf> {
        self.ensure_store().await?;
        let path = self.path_for(title);
        fs::write(&path, content).await?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "note saved");
        Ok(path)
    }

    /// Enumerate `*.md` entries in directory order with their modification
    /// times.
    ///
    /// # Errors
    ///
    /// Returns [`DevNotesError::Store`] if the directory cannot be created,
    /// [`DevNotesError::Io`] if it cannot be read.
    pub async fn list(&self) -> Result<Vec<NoteSummary>> {
        self.ensure_store().await?;
        let mut entries = fs::read_dir(&self.root).await?;
        let mut summaries = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let Some(filename) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if !filename.ends_with(NOTE_EXTENSION) {
                continue;
            }
            // Removed between read_dir and stat.
            let metadata = match fs::metadata(entry.path()).await {
                Ok(m) => m,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            let modified: DateTime<Local> = metadata.modified()?.into();
            summaries.push(NoteSummary {
                title: display_title(&filename),
                filename,
                modified,
            });
        }

        tracing::debug!(count = summaries.len(), "notes listed");
        Ok(summaries)
    }

    /// [`list`](Self::list) rendered as summary lines, or a single
    /// informational line when the store is empty.
    ///
    /// # Errors
    ///
    /// Same as [`list`](Self::list).
    pub async fn list_lines(&self) -> Result<Vec<String>> {
        let summaries = self.list().await?;
        Ok(render_listing(&summaries, &self.root))
    }

    /// Full text of the note derived from `title`.
    ///
    /// # Errors
    ///
    /// Returns [`DevNotesError::Store`] if the directory cannot be created,
    /// [`DevNotesError::NoteNotFound`] if the file is absent or unreadable.
    pub async fn read(&self, title: &str) -> Result<String> {
        self.ensure_store().await?;
        let filename = slugify(title);
        let path = self.root.join(&filename);

        match fs::read(&path).await {
            Ok(bytes) => Ok(String::from_utf8(bytes)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "note read failed");
                Err(DevNotesError::NoteNotFound {
                    title: title.to_string(),
                    filename,
                    dir: self.root.clone(),
                })
            }
        }
    }
}
