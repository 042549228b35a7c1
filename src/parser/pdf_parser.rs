//! Read-only PDF access using lopdf.

use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::detect::sniff_pdf_version;
use crate::error::{Error, Result};
use crate::model::{ExtractedPage, Metadata};
use crate::text::sanitize;

use super::options::{ErrorMode, ParseOptions};

/// An opened source PDF.
///
/// The whole file is read and parsed on open; no file handle is held
/// afterwards. Dropping the source releases the parsed object graph.
pub struct PdfSource {
    doc: LopdfDocument,
    options: ParseOptions,
}

impl PdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        let version = sniff_pdf_version(path)?;
        log::debug!("Opening {} (PDF {})", path.display(), version);

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::IO(io) => Error::source_io(path, io),
            other => Error::from(other),
        })?;

        Self::from_document(doc, options)
    }

    /// Parse a PDF held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF held in memory with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        crate::detect::pdf_version_from_bytes(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Self::from_document(doc, options)
    }

    fn from_document(doc: LopdfDocument, options: ParseOptions) -> Result<Self> {
        // Only documents with an empty user password are readable; others
        // surface as extraction failures per page.
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; text extraction may fail");
        }
        Ok(Self { doc, options })
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Extract the selected pages in page order.
    ///
    /// Pages without extractable text come back with `text: None`. In
    /// [`ErrorMode::Lenient`] a page whose extraction fails is treated the
    /// same way; in [`ErrorMode::Strict`] the failure is returned.
    pub fn extract_pages(&self) -> Result<Vec<ExtractedPage>> {
        let page_ids = self.doc.get_pages();
        let mut pages = Vec::with_capacity(page_ids.len());

        for (&page_num, &page_id) in &page_ids {
            if !self.options.pages.includes(page_num) {
                continue;
            }
            pages.push(self.extract_page_by_id(page_num, page_id)?);
        }

        Ok(pages)
    }

    /// Extract a single page (1-indexed).
    pub fn extract_page(&self, page_num: u32) -> Result<ExtractedPage> {
        let page_id = self
            .doc
            .get_pages()
            .get(&page_num)
            .copied()
            .ok_or_else(|| Error::TextExtract(format!("Page {}: no such page", page_num)))?;
        self.extract_page_by_id(page_num, page_id)
    }

    fn extract_page_by_id(&self, page_num: u32, page_id: ObjectId) -> Result<ExtractedPage> {
        match self.extract_page_text(page_num, page_id) {
            Ok(raw) => {
                let page = ExtractedPage::new(page_num, sanitize(&raw));
                if !page.has_text() {
                    log::debug!("Page {} has no extractable text", page_num);
                }
                Ok(page)
            }
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Failed to extract text from page {}: {}", page_num, e);
                Ok(ExtractedPage::empty(page_num))
            }
            Err(e) => Err(e),
        }
    }

    fn extract_page_text(&self, page_num: u32, page_id: ObjectId) -> Result<String> {
        // lopdf skips unresolvable content streams and reports the page as
        // blank, so check them first.
        self.check_contents(page_id)
            .map_err(|msg| Error::TextExtract(format!("Page {}: {}", page_num, msg)))?;

        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }

    /// Every `/Contents` entry of a page must resolve to a stream.
    fn check_contents(&self, page_id: ObjectId) -> std::result::Result<(), String> {
        let page = self.doc.get_dictionary(page_id).map_err(|e| e.to_string())?;
        let Ok(contents) = page.get(b"Contents") else {
            return Ok(());
        };

        let entries = match contents {
            Object::Null => return Ok(()),
            Object::Array(entries) => entries.as_slice(),
            Object::Reference(id) => match self.doc.get_object(*id) {
                Ok(Object::Stream(_)) => return Ok(()),
                Ok(Object::Array(entries)) => entries.as_slice(),
                Ok(_) => return Err(format!("/Contents {} {} R is not a stream", id.0, id.1)),
                Err(_) => return Err(format!("/Contents {} {} R is missing", id.0, id.1)),
            },
            _ => return Err("/Contents is neither a stream nor an array".to_string()),
        };

        for entry in entries {
            let Ok(id) = entry.as_reference() else {
                return Err("/Contents array holds a direct object".to_string());
            };
            if !matches!(self.doc.get_object(id), Ok(Object::Stream(_))) {
                return Err(format!("content stream {} {} R is missing", id.0, id.1));
            }
        }

        Ok(())
    }

    /// Read document information from the trailer `/Info` dictionary.
    pub fn metadata(&self) -> Metadata {
        let mut metadata = Metadata {
            pdf_version: self.version(),
            page_count: self.page_count(),
            ..Default::default()
        };

        let info = self
            .doc
            .trailer
            .get(b"Info")
            .ok()
            .and_then(|obj| match obj {
                Object::Reference(id) => self.doc.get_dictionary(*id).ok(),
                Object::Dictionary(dict) => Some(dict),
                _ => None,
            });

        if let Some(info) = info {
            metadata.title = get_string_from_dict(info, b"Title");
            metadata.author = get_string_from_dict(info, b"Author");
            metadata.subject = get_string_from_dict(info, b"Subject");
            metadata.keywords = get_string_from_dict(info, b"Keywords");
            metadata.creator = get_string_from_dict(info, b"Creator");
            metadata.producer = get_string_from_dict(info, b"Producer");
            metadata.created =
                get_string_from_dict(info, b"CreationDate").and_then(|d| parse_pdf_date(&d));
        }

        metadata
    }
}

/// Decode a PDF text string (UTF-16BE with BOM, else UTF-8, else Latin-1).
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Get a non-empty string value from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    let value = match dict.get(key).ok()? {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        Object::Name(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        _ => return None,
    };
    let value = value.trim_matches(char::from(0)).trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm'). The offset is ignored.
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);
    if s.len() < 4 {
        return None;
    }

    let field = |range: std::ops::Range<usize>, default: u32| -> Option<u32> {
        match s.get(range) {
            Some(digits) => digits.parse().ok(),
            None => Some(default),
        }
    };

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month = field(4..6, 1)?;
    let day = field(6..8, 1)?;
    let hour = field(8..10, 0)?;
    let minute = field(10..12, 0)?;
    let second = field(12..14, 0)?;

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}
