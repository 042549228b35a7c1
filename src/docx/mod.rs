//! WordprocessingML (.docx) packaging.
//!
//! A DOCX file is a ZIP archive of XML parts. The writer emits the smallest
//! package Word, LibreOffice and Pages all open without repair prompts:
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! docProps/app.xml
//! docProps/core.xml
//! word/_rels/document.xml.rels
//! word/document.xml
//! word/styles.xml
//! ```

mod parts;
mod reader;
mod writer;

pub use reader::{parse_document_xml, read_paragraphs, read_paragraphs_from_bytes};
pub use writer::DocxWriter;

/// WordprocessingML main namespace.
pub(crate) const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office document relationships namespace.
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Path of the main document part inside the package.
pub const DOCUMENT_PART: &str = "word/document.xml";
