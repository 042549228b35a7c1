//! Conversion summary.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::model::ExtractedPage;

/// What a conversion did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    /// Source PDF
    pub source: PathBuf,

    /// Written DOCX
    pub destination: PathBuf,

    /// Pages in the source document
    pub page_count: u32,

    /// Pages extracted from the source (after page selection)
    pub pages_processed: u32,

    /// Paragraphs written to the destination
    pub paragraphs: usize,

    /// Processed pages that had no extractable text (1-indexed)
    pub skipped_pages: Vec<u32>,
}

impl ConvertReport {
    pub(crate) fn new(
        source: &Path,
        destination: &Path,
        page_count: u32,
        pages: &[ExtractedPage],
        paragraphs: usize,
    ) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            page_count,
            pages_processed: pages.len() as u32,
            paragraphs,
            skipped_pages: pages
                .iter()
                .filter(|p| !p.has_text())
                .map(|p| p.number)
                .collect(),
        }
    }

    /// Check if any processed page was skipped for lack of text.
    pub fn has_skipped_pages(&self) -> bool {
        !self.skipped_pages.is_empty()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
