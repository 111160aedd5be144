//! End-to-end tests against a real pdfium library.
//!
//! These tests exercise the default (non-injected) renderer path. They are
//! gated behind the `E2E_ENABLED` environment variable so they do not run
//! in CI unless explicitly requested, and they skip themselves when no
//! pdfium library can be bound on the machine.
//!
//! Run with:
//!   E2E_ENABLED=1 cargo test --test e2e -- --nocapture
//!
//! Point at a specific library with:
//!   PDFIUM_LIB_PATH=/path/to/libpdfium.so E2E_ENABLED=1 cargo test --test e2e

use pdf2img::{
    convert, convert_file, resolve_object_url, ConversionConfig, InputDocument, PdfiumRenderer,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Skip unless E2E_ENABLED is set *and* a pdfium library is bindable.
macro_rules! e2e_skip_unless_ready {
    () => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        if let Err(e) = PdfiumRenderer::new() {
            println!("SKIP — pdfium library not available: {e}");
            return;
        }
    }};
}

/// Assemble a minimal one-page 612×792 pt PDF, computing the xref table at
/// runtime so the offsets are always correct.
fn minimal_pdf() -> Vec<u8> {
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>",
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>",
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>",
    ];

    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_pos = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for off in &offsets {
        out.extend_from_slice(format!("{off:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_pos
        )
        .as_bytes(),
    );
    out
}

// ── Conversion tests ─────────────────────────────────────────────────────────

#[tokio::test]
async fn convert_minimal_pdf_first_page() {
    e2e_skip_unless_ready!();

    let doc = InputDocument::new("report.pdf", minimal_pdf());
    let result = convert(&doc, &ConversionConfig::default()).await;

    let file = result
        .file
        .as_ref()
        .unwrap_or_else(|| panic!("conversion failed: {:?}", result.error));
    assert!(result.error.is_none());
    assert_eq!(file.name, "report.png");
    assert_eq!(file.mime_type, "image/png");

    // 612×792 pt at the fixed 2× scale
    let decoded = image::load_from_memory(&file.bytes).expect("output should be a valid PNG");
    assert_eq!(decoded.width(), 1224);
    assert_eq!(decoded.height(), 1584);

    // The URL references the same bytes until released
    let blob = resolve_object_url(&result.image_url).expect("URL should resolve");
    assert_eq!(blob.as_slice(), file.bytes.as_slice());
    assert!(result.release());
    assert!(resolve_object_url(&result.image_url).is_none());
}

#[tokio::test]
async fn convert_is_pixel_identical_across_runs() {
    e2e_skip_unless_ready!();

    let doc = InputDocument::new("same.pdf", minimal_pdf());
    let config = ConversionConfig::default();

    let first = convert(&doc, &config).await;
    let second = convert(&doc, &config).await;

    let (a, b) = (
        first.file.as_ref().expect("first conversion"),
        second.file.as_ref().expect("second conversion"),
    );
    assert_eq!(a.bytes, b.bytes);
    first.release();
    second.release();
}

#[tokio::test]
async fn malformed_bytes_surface_the_engine_diagnostic() {
    e2e_skip_unless_ready!();

    let doc = InputDocument::new("junk.pdf", b"definitely not a pdf".to_vec());
    let result = convert(&doc, &ConversionConfig::default()).await;

    assert!(result.file.is_none());
    assert_eq!(result.image_url, "");
    let err = result.error.as_deref().expect("error should be present");
    assert!(err.contains("Failed to convert PDF"), "got: {err}");
}

#[tokio::test]
async fn convert_file_writes_png_next_to_input() {
    e2e_skip_unless_ready!();

    let dir = tempfile::tempdir().expect("tempdir");
    let pdf_path = dir.path().join("slides.pdf");
    std::fs::write(&pdf_path, minimal_pdf()).expect("write input");

    let out_path = convert_file(&pdf_path, None, &ConversionConfig::default())
        .await
        .expect("convert_file should succeed");

    assert_eq!(out_path, dir.path().join("slides.png"));
    let png = std::fs::read(&out_path).expect("read output");
    let decoded = image::load_from_memory(&png).expect("valid PNG");
    assert_eq!(decoded.width(), 1224);
}
