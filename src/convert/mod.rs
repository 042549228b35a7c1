//! PDF to DOCX conversion.
//!
//! A single linear pass: open the PDF, extract every selected page, release
//! the PDF, append one paragraph per page that had text, save atomically.
//!
//! # Example
//!
//! ```no_run
//! use pdf2docx::convert::{ConvertOptions, Converter};
//! use pdf2docx::PageSelection;
//!
//! fn main() -> pdf2docx::Result<()> {
//!     let options = ConvertOptions::new()
//!         .with_pages(PageSelection::parse("1-3")?)
//!         .lenient();
//!     let report = Converter::new(options).convert("input.pdf", "output.docx")?;
//!     println!("{} paragraph(s)", report.paragraphs);
//!     Ok(())
//! }
//! ```

mod report;

pub use report::ConvertReport;

use std::path::Path;

use crate::docx::DocxWriter;
use crate::error::Result;
use crate::model::{CoreProperties, ExtractedPage, OutputDocument, Paragraph};
use crate::parser::{ErrorMode, PageSelection, ParseOptions, PdfSource};

/// Options for a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// How per-page extraction failures are handled
    pub error_mode: ErrorMode,

    /// Which source pages to convert
    pub pages: PageSelection,

    /// Start every paragraph after the first on a new page
    pub page_breaks: bool,

    /// Title for the output document (defaults to the PDF's title)
    pub title: Option<String>,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Treat pages that fail extraction as pages without text.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable page breaks between paragraphs.
    pub fn with_page_breaks(mut self, page_breaks: bool) -> Self {
        self.page_breaks = page_breaks;
        self
    }

    /// Set the output document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_error_mode(self.error_mode)
            .with_pages(self.pages.clone())
    }
}

/// Converts PDF files to DOCX.
///
/// Holds no state between calls; one converter may be shared across
/// threads converting different file pairs.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert the PDF at `source` into a DOCX at `destination`.
    ///
    /// The destination is created or replaced only if every step succeeds.
    pub fn convert<S, D>(&self, source: S, destination: D) -> Result<ConvertReport>
    where
        S: AsRef<Path>,
        D: AsRef<Path>,
    {
        let (source, destination) = (source.as_ref(), destination.as_ref());

        // The source is dropped at the end of this block, before anything
        // touches the destination.
        let (page_count, pages, document) = {
            let pdf = PdfSource::open_with_options(source, self.options.parse_options())?;
            let pages = pdf.extract_pages()?;
            let document = self.build_document(&pages, self.core_properties(&pdf));
            (pdf.page_count(), pages, document)
        };

        DocxWriter::new(&document).save(destination)?;

        let report = ConvertReport::new(
            source,
            destination,
            page_count,
            &pages,
            document.paragraph_count(),
        );
        log::info!(
            "Saved {} ({} paragraph(s) from {} page(s))",
            destination.display(),
            report.paragraphs,
            report.pages_processed
        );
        Ok(report)
    }

    /// Build the output document from extracted pages without saving it.
    pub fn build_document(
        &self,
        pages: &[ExtractedPage],
        properties: CoreProperties,
    ) -> OutputDocument {
        let mut document = OutputDocument {
            properties,
            paragraphs: Vec::with_capacity(pages.len()),
        };

        for page in pages {
            let Some(text) = &page.text else {
                continue;
            };
            let page_break = self.options.page_breaks && !document.is_empty();
            document.add_paragraph(
                Paragraph::with_text(text.as_str())
                    .from_page(page.number)
                    .with_page_break(page_break),
            );
        }

        document
    }

    fn core_properties(&self, pdf: &PdfSource) -> CoreProperties {
        let mut properties = CoreProperties::from(&pdf.metadata());
        if let Some(title) = &self.options.title {
            properties.title = Some(title.clone());
        }
        properties
    }
}
