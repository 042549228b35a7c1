//! Helpers shared by integration tests: building small PDFs with lopdf.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF where each entry is one page.
///
/// `Some(text)` draws the text (one text object per line); `None` draws a
/// filled rectangle and no text, like a scanned or blank page.
pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    build_pdf_with_title(pages, None)
}

/// Same as [`build_pdf`], with an optional `/Info /Title`.
pub fn build_pdf_with_title(pages: &[Option<&str>], title: Option<&str>) -> Vec<u8> {
    build(pages, title, None)
}

/// Same as [`build_pdf`], except page `broken` (1-indexed) has a `/Contents`
/// reference to an object that does not exist.
pub fn build_pdf_with_missing_contents(pages: &[Option<&str>], broken: usize) -> Vec<u8> {
    build(pages, None, Some(broken))
}

fn build(pages: &[Option<&str>], title: Option<&str>, broken: Option<usize>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (i, page) in pages.iter().enumerate() {
        let content = Content {
            operations: page_operations(*page),
        };
        let mut content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        if broken == Some(i + 1) {
            content_id = (9999, 0);
        }
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(title) = title {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Author" => Object::string_literal("Test Author"),
            "CreationDate" => Object::string_literal("D:20240115103045Z"),
        });
        doc.trailer.set("Info", info_id);
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn page_operations(text: Option<&str>) -> Vec<Operation> {
    let Some(text) = text else {
        return vec![
            Operation::new("re", vec![72.into(), 72.into(), 200.into(), 200.into()]),
            Operation::new("f", vec![]),
        ];
    };

    let mut ops = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let y = 700 - 20 * i as i64;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        ops.push(Operation::new("Td", vec![72.into(), y.into()]));
        ops.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

/// Write a PDF into `dir` and return its path.
pub fn write_pdf(dir: &Path, name: &str, pages: &[Option<&str>]) -> PathBuf {
    write_bytes(dir, name, &build_pdf(pages))
}

/// Write raw bytes into `dir` and return the path.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
