//! Error types for pdf2docx.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdf2docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a PDF to DOCX.
#[derive(Error, Debug)]
pub enum Error {
    /// The source path does not exist or cannot be accessed.
    #[error("Source not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The destination could not be created or written.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Error assembling the DOCX package (zip or XML).
    #[error("DOCX packaging error: {0}")]
    Package(String),

    /// A DOCX file being read back is not a valid package.
    #[error("Invalid DOCX package: {0}")]
    InvalidDocx(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error serializing a report.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error not attributable to the source or destination path.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Coarse classification of an [`Error`], for callers that pick a policy
/// per kind (abort, skip, report).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source path missing or inaccessible
    NotFound,
    /// Source is not a parseable PDF
    Format,
    /// Destination could not be written
    Write,
    /// Anything else (bad arguments, stray I/O)
    Other,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::UnknownFormat
            | Error::UnsupportedVersion(_)
            | Error::PdfParse(_)
            | Error::Encrypted
            | Error::TextExtract(_)
            | Error::InvalidDocx(_) => ErrorKind::Format,
            Error::Write { .. } | Error::Package(_) => ErrorKind::Write,
            Error::InvalidPageRange(_) | Error::Serialize(_) | Error::Io(_) => ErrorKind::Other,
        }
    }

    /// Wrap an I/O failure on the destination path.
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    /// Map an I/O failure while opening the source path.
    pub(crate) fn source_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                Error::NotFound(path.into())
            }
            // A file shorter than the PDF header cannot be a PDF.
            io::ErrorKind::UnexpectedEof => Error::UnknownFormat,
            _ => Error::Io(err),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Package(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Package(err.to_string())
    }
}
