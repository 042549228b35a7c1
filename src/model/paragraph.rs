//! Paragraph type for the output document.

use serde::{Deserialize, Serialize};

/// A single block of text in the output document.
///
/// One paragraph holds the whole text of one source page. Line breaks and
/// tabs inside the text are kept and encoded as `<w:br/>` / `<w:tab/>`
/// when the document is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,

    /// Source page this paragraph came from (1-indexed), if known
    pub source_page: Option<u32>,

    /// Start this paragraph on a new page
    pub page_break_before: bool,
}

impl Paragraph {
    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_page: None,
            page_break_before: false,
        }
    }

    /// Record the source page number.
    pub fn from_page(mut self, page_number: u32) -> Self {
        self.source_page = Some(page_number);
        self
    }

    /// Request a page break before this paragraph.
    pub fn with_page_break(mut self, page_break: bool) -> Self {
        self.page_break_before = page_break;
        self
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Iterate over the text split into segments for encoding.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        Segments {
            rest: &self.text,
            pending: None,
        }
    }
}

/// A piece of paragraph text as it maps onto WordprocessingML run content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text (no `\n` or `\t`)
    Text(&'a str),
    /// Line break (`<w:br/>`)
    Break,
    /// Tab (`<w:tab/>`)
    Tab,
}

struct Segments<'a> {
    rest: &'a str,
    pending: Option<Segment<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(seg) = self.pending.take() {
            return Some(seg);
        }
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\t']) {
            Some(idx) => {
                let control = match self.rest.as_bytes()[idx] {
                    b'\n' => Segment::Break,
                    _ => Segment::Tab,
                };
                let text = &self.rest[..idx];
                self.rest = &self.rest[idx + 1..];
                if text.is_empty() {
                    Some(control)
                } else {
                    self.pending = Some(control);
                    Some(Segment::Text(text))
                }
            }
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Segment::Text(text))
            }
        }
    }
}
