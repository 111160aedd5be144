//! Error types for the pdf2img library.
//!
//! Internally the pipeline propagates a structured [`Pdf2ImgError`] with `?`,
//! like any other Rust library. At the [`crate::convert::convert`] boundary,
//! however, every failure is folded into the
//! [`crate::output::ConversionResult`] shape — `error` becomes a message
//! string, `file` stays `None`, `image_url` stays empty. Nothing escapes the
//! converter as `Err` or a panic; callers branch on the presence of `error`
//! vs `file`.
//!
//! File-based entry points ([`crate::convert::convert_file`]) keep the
//! conventional `Result` contract since their failures (missing file, bad
//! permissions, write errors) are fatal for the caller anyway.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the pdf2img library.
#[derive(Debug, Error)]
pub enum Pdf2ImgError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    // ── Environment errors ────────────────────────────────────────────────
    /// Rendering capability was explicitly disabled for this conversion.
    ///
    /// Reported immediately, before any engine interaction. Non-retryable.
    #[error("PDF to image conversion is not available in this environment (no rendering capability)")]
    EnvironmentUnsupported,

    // ── Engine errors ─────────────────────────────────────────────────────
    /// The rendering engine failed during document open, page fetch, or
    /// rendering. Carries the underlying diagnostic verbatim; this library
    /// performs no PDF validation of its own, so malformed input, encrypted
    /// documents, and zero-page documents all surface here as whatever the
    /// engine reports.
    #[error("Failed to convert PDF: {detail}")]
    Engine { detail: String },

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium to use an existing copy,\n\
or install pdfium as a system library."
    )]
    PdfiumBindingFailed(String),

    // ── Surface errors ────────────────────────────────────────────────────
    /// A drawing surface with the requested dimensions could not be
    /// allocated (degenerate page sizes floor to zero pixels).
    #[error("Failed to allocate a {width}x{height} px drawing surface")]
    Surface { width: u32, height: u32 },

    /// PNG serialisation of the drawing surface produced no data.
    #[error("PNG encoding produced no data")]
    EmptyEncode,

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output PNG file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_display_embeds_diagnostic() {
        let e = Pdf2ImgError::Engine {
            detail: "PdfiumLibraryInternalError(FormatError)".into(),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Failed to convert PDF:"), "got: {msg}");
        assert!(msg.contains("FormatError"));
    }

    #[test]
    fn surface_display_includes_dimensions() {
        let e = Pdf2ImgError::Surface {
            width: 0,
            height: 1584,
        };
        assert!(e.to_string().contains("0x1584"));
    }

    #[test]
    fn environment_display_is_non_retryable_statement() {
        let msg = Pdf2ImgError::EnvironmentUnsupported.to_string();
        assert!(msg.contains("not available"));
    }

    #[test]
    fn file_not_found_display() {
        let e = Pdf2ImgError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert!(e.to_string().contains("/tmp/missing.pdf"));
    }
}
