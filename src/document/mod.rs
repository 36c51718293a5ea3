//! # PreTeXt Documents
//!
//! Renders the calendar into PreTeXt markup.
//!
//! | Document | File | Contents |
//! |----------|------|----------|
//! | Week | `weekNN.ptx` | `<subsection>` listing the week's meetings |
//! | Index | `main.ptx` | `<section>` that XIncludes every week in order |
//!
//! Markup is assembled line by line and joined with `\n`; nothing is
//! escaped. Meeting bodies hold a placeholder to be filled in by hand.

mod week;
mod index;

use serde::{Deserialize, Serialize};

pub use index::IndexDocument;
pub use week::WeekDocument;

/// File name of the index document
pub const INDEX_FILE_NAME: &str = "main.ptx";

/// Returns the file name for a week document (`week01.ptx`)
pub fn week_file_name(number: u32) -> String {
    format!("week{:02}.ptx", number)
}

/// Editable texts placed into the generated documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentSettings {
    /// Body of each meeting entry
    pub placeholder: String,

    /// Title of the index section
    pub index_title: String,

    /// `xml:id` of the index section
    pub index_id: String,

    /// Closing warning paragraph of the index
    pub disclaimer: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            placeholder: "Material".to_string(),
            index_title: "Schedule".to_string(),
            index_id: "schedule".to_string(),
            disclaimer: "The instructor reserves the right to modify the schedule as needed."
                .to_string(),
        }
    }
}

/// A rendered document ready to be written
pub trait Document {
    /// File name relative to the output directory
    fn file_name(&self) -> &str;

    /// Full markup text
    fn contents(&self) -> &str;
}
