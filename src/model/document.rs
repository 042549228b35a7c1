//! Document-level types.

use super::Paragraph;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The Word document being built.
///
/// Paragraphs are appended in source page order and written out with
/// [`crate::docx::DocxWriter`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputDocument {
    /// Document properties written to `docProps/core.xml`
    pub properties: CoreProperties,

    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl OutputDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Document information read from the PDF trailer `/Info` dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Application that created the original document
    pub creator: Option<String>,

    /// Application that produced the PDF
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Total number of pages
    pub page_count: u32,
}

/// Package-level properties of the output document (Dublin Core subset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreProperties {
    /// `dc:title`
    pub title: Option<String>,

    /// `dc:subject`
    pub subject: Option<String>,

    /// `dc:creator` (the PDF author)
    pub creator: Option<String>,

    /// `cp:keywords`
    pub keywords: Option<String>,

    /// `dcterms:created` and `dcterms:modified`
    pub created: DateTime<Utc>,
}

impl Default for CoreProperties {
    fn default() -> Self {
        Self {
            title: None,
            subject: None,
            creator: None,
            keywords: None,
            created: Utc::now(),
        }
    }
}

impl From<&Metadata> for CoreProperties {
    fn from(meta: &Metadata) -> Self {
        Self {
            title: meta.title.clone(),
            subject: meta.subject.clone(),
            creator: meta.author.clone(),
            keywords: meta.keywords.clone(),
            created: meta.created.unwrap_or_else(Utc::now),
        }
    }
}
