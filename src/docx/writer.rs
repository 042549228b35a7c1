//! DOCX package writer.

use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::model::{CoreProperties, OutputDocument, Paragraph, Segment};
use crate::text::is_xml_char;

use super::parts::{
    APP_PROPERTIES, CONTENT_TYPES, DOCUMENT_RELS, PACKAGE_RELS, SECTION_PAGE_MARGINS,
    SECTION_PAGE_SIZE, STYLES,
};
use super::{DOCUMENT_PART, NS_R, NS_W};

/// Serializes an [`OutputDocument`] into a DOCX package.
///
/// # Example
///
/// ```no_run
/// use pdf2docx::docx::DocxWriter;
/// use pdf2docx::model::{OutputDocument, Paragraph};
///
/// let mut doc = OutputDocument::new();
/// doc.add_paragraph(Paragraph::with_text("Hello world"));
/// DocxWriter::new(&doc).save("hello.docx")?;
/// # Ok::<(), pdf2docx::Error>(())
/// ```
pub struct DocxWriter<'a> {
    document: &'a OutputDocument,
}

impl<'a> DocxWriter<'a> {
    /// Create a writer for the given document.
    pub fn new(document: &'a OutputDocument) -> Self {
        Self { document }
    }

    /// Write the package into any seekable sink and return the sink.
    pub fn write_to<W: Write + Seek>(&self, sink: W) -> Result<W> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(sink);

        let document_xml = document_xml(self.document)?;
        let core_xml = core_properties_xml(&self.document.properties)?;

        let entries: [(&str, &[u8]); 7] = [
            ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
            ("_rels/.rels", PACKAGE_RELS.as_bytes()),
            ("docProps/app.xml", APP_PROPERTIES.as_bytes()),
            ("docProps/core.xml", &core_xml),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes()),
            (DOCUMENT_PART, &document_xml),
            ("word/styles.xml", STYLES.as_bytes()),
        ];

        for (name, data) in entries {
            zip.start_file(name, options)?;
            zip.write_all(data)?;
        }

        Ok(zip.finish()?)
    }

    /// Serialize the package into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.write_to(Cursor::new(Vec::new()))?.into_inner())
    }

    /// Save the package to `path`, replacing any existing file.
    ///
    /// The package is written to a temporary file next to `path` and renamed
    /// into place once complete, so a failed save never leaves a partial
    /// file at `path`. A missing parent directory fails with
    /// [`Error::Write`] before anything is created. An existing file keeps
    /// its permissions.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut builder = tempfile::Builder::new();
        builder.prefix(".pdf2docx-").suffix(".tmp");
        if let Some(permissions) = new_file_permissions() {
            builder.permissions(permissions);
        }
        let tmp = builder
            .tempfile_in(staging_dir(path))
            .map_err(|e| Error::write(path, e))?;

        // A replaced file keeps its mode.
        if let Ok(existing) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Error::write(path, e))?;
        }

        let written = self
            .write_to(BufWriter::new(tmp.as_file()))
            .and_then(|mut sink| sink.flush().map_err(Error::from));
        if let Err(e) = written {
            return Err(match e {
                Error::Io(io) => Error::write(path, io),
                other => other,
            });
        }

        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::write(path, e))?;
        let file: File = tmp.persist(path).map_err(|e| Error::write(path, e.error))?;
        drop(file);

        log::debug!(
            "Wrote {} paragraph(s) to {}",
            self.document.paragraph_count(),
            path.display()
        );
        Ok(())
    }
}

/// Mode for a newly created package: `0o666` before the umask, like any
/// ordinary file creation. `None` keeps the platform default.
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Directory for the temporary file: the destination's own directory, so
/// the final rename never crosses filesystems.
fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

type XmlWriter = Writer<Vec<u8>>;

fn new_part() -> Result<XmlWriter> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(writer)
}

fn open(writer: &mut XmlWriter, start: BytesStart<'_>) -> Result<()> {
    writer.write_event(Event::Start(start))?;
    Ok(())
}

fn close(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn empty(writer: &mut XmlWriter, element: BytesStart<'_>) -> Result<()> {
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn text_element(
    writer: &mut XmlWriter,
    start: BytesStart<'_>,
    name: &str,
    text: &str,
) -> Result<()> {
    open(writer, start)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    close(writer, name)
}

/// Build `word/document.xml`.
fn document_xml(document: &OutputDocument) -> Result<Vec<u8>> {
    let mut w = new_part()?;

    open(
        &mut w,
        BytesStart::new("w:document").with_attributes([("xmlns:w", NS_W), ("xmlns:r", NS_R)]),
    )?;
    open(&mut w, BytesStart::new("w:body"))?;

    for paragraph in &document.paragraphs {
        write_paragraph(&mut w, paragraph)?;
    }

    open(&mut w, BytesStart::new("w:sectPr"))?;
    empty(&mut w, BytesStart::new("w:pgSz").with_attributes(SECTION_PAGE_SIZE))?;
    empty(&mut w, BytesStart::new("w:pgMar").with_attributes(SECTION_PAGE_MARGINS))?;
    close(&mut w, "w:sectPr")?;

    close(&mut w, "w:body")?;
    close(&mut w, "w:document")?;
    Ok(w.into_inner())
}

fn write_paragraph(w: &mut XmlWriter, paragraph: &Paragraph) -> Result<()> {
    open(w, BytesStart::new("w:p"))?;

    if paragraph.page_break_before {
        open(w, BytesStart::new("w:pPr"))?;
        empty(w, BytesStart::new("w:pageBreakBefore"))?;
        close(w, "w:pPr")?;
    }

    let mut segments = paragraph.segments().peekable();
    if segments.peek().is_some() {
        open(w, BytesStart::new("w:r"))?;
        for segment in segments {
            match segment {
                Segment::Text(text) => {
                    let text = xml_safe(text);
                    text_element(
                        w,
                        BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
                        "w:t",
                        &text,
                    )?;
                }
                Segment::Break => empty(w, BytesStart::new("w:br"))?,
                Segment::Tab => empty(w, BytesStart::new("w:tab"))?,
            }
        }
        close(w, "w:r")?;
    }

    close(w, "w:p")
}

/// Build `docProps/core.xml`.
fn core_properties_xml(props: &CoreProperties) -> Result<Vec<u8>> {
    let mut w = new_part()?;

    open(
        &mut w,
        BytesStart::new("cp:coreProperties").with_attributes([
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ]),
    )?;

    let optional = [
        ("dc:title", &props.title),
        ("dc:subject", &props.subject),
        ("dc:creator", &props.creator),
        ("cp:keywords", &props.keywords),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            text_element(&mut w, BytesStart::new(name), name, &xml_safe(value))?;
        }
    }

    let created = props.created.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    for name in ["dcterms:created", "dcterms:modified"] {
        text_element(
            &mut w,
            BytesStart::new(name).with_attributes([("xsi:type", "dcterms:W3CDTF")]),
            name,
            &created,
        )?;
    }

    close(&mut w, "cp:coreProperties")?;
    Ok(w.into_inner())
}

/// Drop characters XML 1.0 cannot carry.
fn xml_safe(text: &str) -> String {
    text.chars().filter(|&c| is_xml_char(c)).collect()
}
