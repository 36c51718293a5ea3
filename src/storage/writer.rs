//! Writes rendered documents into the output directory
//!
//! Files are overwritten in place. A failed write leaves any files from
//! earlier in the run on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::document::Document;

/// Writer for generated schedule files
pub struct ScheduleWriter {
    /// Directory receiving the files
    dir: PathBuf,
}

impl ScheduleWriter {
    /// Creates a writer for the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path a document would be written to
    pub fn path_for(&self, doc: &impl Document) -> PathBuf {
        self.dir.join(doc.file_name())
    }

    /// Writes a document, replacing any existing file of the same name
    pub fn write(&self, doc: &impl Document) -> Result<PathBuf> {
        let path = self.path_for(doc);

        fs::write(&path, doc.contents())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}
