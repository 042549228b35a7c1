//! PDF header sniffing.
//!
//! `lopdf` reports a missing header as a generic parse failure deep inside
//! its xref reader. Checking the first bytes up front lets a `.txt` renamed
//! to `.pdf` fail as [`Error::UnknownFormat`] with a clear message.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Magic plus a three-character version such as "1.7".
const HEADER_LEN: usize = PDF_MAGIC.len() + 3;

/// Read the header of the file at `path` and return its PDF version.
///
/// A missing or unreadable path yields [`Error::NotFound`]; a file that is
/// too short or lacks the magic yields [`Error::UnknownFormat`].
pub fn sniff_pdf_version(path: &Path) -> Result<String> {
    let mut file = open_source(path)?;
    let mut header = [0u8; HEADER_LEN];
    file.read_exact(&mut header)
        .map_err(|e| Error::source_io(path, e))?;
    pdf_version_from_bytes(&header)
}

/// Open an input file for reading.
///
/// A directory counts as an inaccessible source: it opens fine on Unix and
/// only fails on the first read.
pub(crate) fn open_source(path: &Path) -> Result<File> {
    if path.is_dir() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    File::open(path).map_err(|e| Error::source_io(path, e))
}

/// Return the PDF version declared by a header slice.
pub fn pdf_version_from_bytes(data: &[u8]) -> Result<String> {
    if data.len() < HEADER_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version = &data[PDF_MAGIC.len()..HEADER_LEN];
    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(version).into_owned())
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version).into_owned(),
        )),
    }
}
