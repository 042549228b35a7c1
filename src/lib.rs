//! # pdf2docx
//!
//! Extract the text of a PDF into a Word (`.docx`) document, one paragraph
//! per page.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdf2docx::Result<()> {
//!     let report = pdf2docx::convert("document.pdf", "document.docx")?;
//!     println!("Saved to {}", report.destination.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - Pages are visited in order; each page's full text becomes one paragraph.
//! - Pages without extractable text (blank or scanned pages) are skipped and
//!   listed in [`ConvertReport::skipped_pages`].
//! - The output is written to a temporary file and renamed into place, so a
//!   failed conversion never leaves a partial file behind.
//! - Failures are returned as [`Error`] values; [`Error::kind`] classifies
//!   them as not-found, format, or write errors.
//!
//! Layout, fonts, images and tables are not carried over.

pub mod convert;
pub mod detect;
pub mod docx;
pub mod error;
pub mod model;
pub mod parser;
pub mod text;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertReport, Converter};
pub use docx::{read_paragraphs, DocxWriter};
pub use error::{Error, ErrorKind, Result};
pub use model::{CoreProperties, ExtractedPage, Metadata, OutputDocument, Paragraph};
pub use parser::{ErrorMode, PageSelection, ParseOptions, PdfSource};

use std::path::Path;

/// Convert a PDF file to a DOCX file with default options.
///
/// # Arguments
///
/// * `source` - Path to the PDF file
/// * `destination` - Path of the DOCX file to create or replace
///
/// # Example
///
/// ```no_run
/// use pdf2docx::convert;
///
/// let report = convert("report.pdf", "report.docx").unwrap();
/// println!("{} paragraph(s)", report.paragraphs);
/// ```
pub fn convert<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Result<ConvertReport> {
    Converter::default().convert(source, destination)
}

/// Convert a PDF file to a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdf2docx::{convert_with_options, ConvertOptions, PageSelection};
///
/// let options = ConvertOptions::new()
///     .with_pages(PageSelection::Range(1..=10))
///     .with_page_breaks(true);
/// convert_with_options("book.pdf", "book.docx", options).unwrap();
/// ```
pub fn convert_with_options<S: AsRef<Path>, D: AsRef<Path>>(
    source: S,
    destination: D,
    options: ConvertOptions,
) -> Result<ConvertReport> {
    Converter::new(options).convert(source, destination)
}

/// Read document information from a PDF without converting it.
pub fn pdf_metadata<P: AsRef<Path>>(path: P) -> Result<Metadata> {
    Ok(PdfSource::open(path)?.metadata())
}
