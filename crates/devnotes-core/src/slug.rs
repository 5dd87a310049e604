//! Title to filename derivation.
//!
//! A note's filename is a pure function of its title:
//! `"Project Ideas"` becomes `"project-ideas.md"`. Titles that normalize to
//! the same slug share one file.

use crate::config::NOTE_EXTENSION;

const SEPARATOR: char = '-';

/// Derive the note filename for `title`.
///
/// Lowercases and trims the title, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, strips separators at either end and appends
/// the note extension. A title with no usable characters yields just `".md"`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len() + NOTE_EXTENSION.len());
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug.push_str(NOTE_EXTENSION);
    slug
}

/// Recover a human-readable title from a note filename.
///
/// Strips the note extension and turns separators back into spaces. The
/// original casing and punctuation are gone for good.
#[must_use]
pub fn display_title(filename: &str) -> String {
    filename
        .strip_suffix(NOTE_EXTENSION)
        .unwrap_or(filename)
        .replace(SEPARATOR, " ")
}
