//! Source page type.

use serde::{Deserialize, Serialize};

/// Text extracted from one page of the source PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Sanitized page text; `None` when the page has no extractable text
    /// (blank or image-only pages)
    pub text: Option<String>,
}

impl ExtractedPage {
    /// Create a page with text. Empty or whitespace-only text is stored as `None`.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            number,
            text: if text.trim().is_empty() { None } else { Some(text) },
        }
    }

    /// Create a page that produced no text.
    pub fn empty(number: u32) -> Self {
        Self { number, text: None }
    }

    /// Check if the page has extractable text.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_empty() {
        let page = ExtractedPage::new(2, " \n\t");
        assert_eq!(page.number, 2);
        assert!(!page.has_text());
    }

    #[test]
    fn test_page_with_text() {
        let page = ExtractedPage::new(1, "Hello");
        assert_eq!(page.text.as_deref(), Some("Hello"));
        assert!(!ExtractedPage::empty(4).has_text());
    }
}
