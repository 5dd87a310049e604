//! # devnotes-vault
//!
//! The note store: one directory, one `<slug>.md` file per note, raw text
//! content with no metadata header and no index. The filesystem owns all
//! state; two saves whose titles share a slug are last-writer-wins.

mod listing;
mod store;

pub use listing::{render_listing, NoteSummary};
pub use store::NoteStore;
