//! Benchmarks for pdf2docx conversion performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdf2docx::model::{CoreProperties, OutputDocument, Paragraph};
use pdf2docx::{Converter, DocxWriter, ExtractedPage, PdfSource};

/// Creates a synthetic PDF with the given number of text pages.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(page_count);
    for i in 0..page_count {
        let line = format!(
            "Page {} - Benchmark test content for pdf2docx performance measurement.",
            i + 1
        );
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let encoded = content.encode().unwrap_or_default();
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize benchmark PDF");
    bytes
}

/// Benchmark PDF signature detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("detect_valid_pdf", |b| {
        b.iter(|| pdf2docx::detect::pdf_version_from_bytes(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("detect_non_pdf", |b| {
        b.iter(|| pdf2docx::detect::pdf_version_from_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark page text extraction at various sizes.
fn bench_text_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_extraction");

    for page_count in [1, 10, 50].iter() {
        let data = create_test_pdf(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| {
                let source = PdfSource::from_bytes(black_box(&data)).unwrap();
                source.extract_pages().unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark DOCX packaging without touching the filesystem.
fn bench_docx_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_writing");

    for paragraph_count in [1, 100, 1000].iter() {
        let mut document = OutputDocument::new();
        for i in 0..*paragraph_count {
            document.add_paragraph(Paragraph::with_text(format!(
                "Paragraph {}\nSecond line with <markup> & tabs\there",
                i + 1
            )));
        }

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| DocxWriter::new(black_box(&document)).to_bytes().unwrap());
        });
    }

    group.finish();
}

/// Benchmark assembling the output document from extracted pages.
fn bench_build_document(c: &mut Criterion) {
    let pages: Vec<ExtractedPage> = (1..=500)
        .map(|n| {
            if n % 5 == 0 {
                ExtractedPage::empty(n)
            } else {
                ExtractedPage::new(n, format!("Text of page {}", n))
            }
        })
        .collect();
    let converter = Converter::default();

    c.bench_function("build_document_500_pages", |b| {
        b.iter(|| converter.build_document(black_box(&pages), CoreProperties::default()));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_text_extraction,
    bench_docx_writing,
    bench_build_document,
);
criterion_main!(benches);
