//! Reading paragraph text back out of a DOCX package.

use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::detect::open_source;
use crate::error::{Error, Result};

use super::DOCUMENT_PART;

/// Read the plain text of every paragraph in a DOCX file.
///
/// `<w:br/>` becomes `\n` and `<w:tab/>` becomes `\t`; all other markup is
/// ignored. Empty paragraphs are returned as empty strings.
pub fn read_paragraphs<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = open_source(path)?;
    read_from_archive(BufReader::new(file))
}

/// Read paragraph text from an in-memory DOCX package.
pub fn read_paragraphs_from_bytes(data: &[u8]) -> Result<Vec<String>> {
    read_from_archive(Cursor::new(data))
}

fn read_from_archive<R: Read + Seek>(reader: R) -> Result<Vec<String>> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| Error::InvalidDocx(format!("not a zip archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| Error::InvalidDocx(format!("missing {}", DOCUMENT_PART)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::InvalidDocx(format!("unreadable {}: {}", DOCUMENT_PART, e)))?;

    parse_document_xml(&xml)
}

/// Extract paragraph text from the contents of `word/document.xml`.
pub fn parse_document_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let invalid = |e: quick_xml::Error| Error::InvalidDocx(e.to_string());

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(invalid)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current = Some(String::new()),
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"br" | b"cr" if in_run => push(&mut current, "\n"),
                b"tab" if in_run => push(&mut current, "\t"),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(invalid)?;
                push(&mut current, &text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.extend(current.take()),
                b"r" => in_run = false,
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push(current: &mut Option<String>, text: &str) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push_str(text);
    }
}
