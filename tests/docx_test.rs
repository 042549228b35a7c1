//! Integration tests for the DOCX writer and reader.

use std::io::{Cursor, Read};

use pdf2docx::docx::{read_paragraphs_from_bytes, DOCUMENT_PART};
use pdf2docx::{read_paragraphs, DocxWriter, Error, ErrorKind, OutputDocument, Paragraph};
use tempfile::tempdir;

fn sample_document() -> OutputDocument {
    let mut doc = OutputDocument::new();
    doc.properties.title = Some("Sample".to_string());
    doc.add_paragraph(Paragraph::with_text("Introduction"));
    doc.add_paragraph(Paragraph::with_text("Body line 1\nBody line 2\tindented"));
    doc.add_paragraph(Paragraph::with_text("Conclusion").with_page_break(true));
    doc
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_save_and_read_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.docx");

    DocxWriter::new(&sample_document()).save(&path).unwrap();

    assert_eq!(
        read_paragraphs(&path).unwrap(),
        vec![
            "Introduction",
            "Body line 1\nBody line 2\tindented",
            "Conclusion"
        ]
    );
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.docx");
    std::fs::write(&path, "stale contents").unwrap();

    let mut doc = OutputDocument::new();
    doc.add_paragraph(Paragraph::with_text("fresh"));
    DocxWriter::new(&doc).save(&path).unwrap();

    assert_eq!(read_paragraphs(&path).unwrap(), vec!["fresh"]);
}

#[test]
fn test_save_into_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.docx");

    let err = DocxWriter::new(&sample_document()).save(&path).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Write);
    assert!(!path.exists());
}

#[test]
fn test_in_memory_package() {
    let bytes = DocxWriter::new(&sample_document()).to_bytes().unwrap();

    assert_eq!(read_paragraphs_from_bytes(&bytes).unwrap().len(), 3);

    let document = read_part(&bytes, DOCUMENT_PART);
    assert!(document.contains("<w:pageBreakBefore/>"));

    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("<dc:title>Sample</dc:title>"));

    let content_types = read_part(&bytes, "[Content_Types].xml");
    assert!(content_types.contains("wordprocessingml.document.main+xml"));
}

#[test]
fn test_read_missing_file() {
    let err = read_paragraphs("/nonexistent/path/file.docx").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_read_zip_without_document_part() {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buf);
        zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        std::io::Write::write_all(&mut zip, b"hello").unwrap();
        zip.finish().unwrap();
    }

    let err = read_paragraphs_from_bytes(buf.get_ref()).unwrap_err();
    assert!(matches!(err, Error::InvalidDocx(_)));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[cfg(unix)]
#[test]
fn test_saved_file_gets_ordinary_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let reference = dir.path().join("reference.txt");
    std::fs::write(&reference, "x").unwrap();
    let expected = std::fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

    let path = dir.path().join("fresh.docx");
    DocxWriter::new(&sample_document()).save(&path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, expected);
}

#[cfg(unix)]
#[test]
fn test_overwrite_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("shared.docx");
    std::fs::write(&path, "old").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    DocxWriter::new(&sample_document()).save(&path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert_eq!(read_paragraphs(&path).unwrap().len(), 3);
}

#[test]
fn test_read_directory_is_not_found() {
    let dir = tempdir().unwrap();
    let err = read_paragraphs(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
