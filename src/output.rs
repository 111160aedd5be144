//! Conversion result types — the output contract of this crate.
//!
//! [`ConversionResult`] is deliberately a plain value, not a `Result`:
//! every failure mode of the converter is folded into it at the boundary.
//! Exactly one of `{file, error}` is populated, and `image_url` is
//! non-empty if and only if `file` is present. The result is immutable once
//! constructed; the caller owns it entirely and is responsible for calling
//! [`ConversionResult::release`] when the object URL is no longer needed.

use crate::error::Pdf2ImgError;
use crate::object_url;
use serde::{Deserialize, Serialize};

/// MIME type of every output file this crate produces.
pub const PNG_MIME: &str = "image/png";

/// The rasterised first page, as a named in-memory file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFile {
    /// PNG byte stream.
    pub bytes: Vec<u8>,
    /// Input filename with a trailing case-insensitive `.pdf` replaced by
    /// `.png` (or `.png` appended when no such suffix exists).
    pub name: String,
    /// Always [`PNG_MIME`].
    pub mime_type: String,
}

/// Outcome of a conversion. Construct via [`ConversionResult::success`] /
/// [`ConversionResult::failure`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Object URL for the PNG bytes; `""` on failure.
    pub image_url: String,
    /// Present iff the conversion succeeded.
    pub file: Option<OutputFile>,
    /// Present iff the conversion failed; human-readable diagnostic.
    pub error: Option<String>,
}

impl ConversionResult {
    pub(crate) fn success(file: OutputFile, image_url: String) -> Self {
        Self {
            image_url,
            file: Some(file),
            error: None,
        }
    }

    pub(crate) fn failure(err: Pdf2ImgError) -> Self {
        Self {
            image_url: String::new(),
            file: None,
            error: Some(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.file.is_some()
    }

    /// Revoke the object URL backing `image_url`.
    ///
    /// Every successful result holds one registry entry; call this once the
    /// URL is no longer needed. Returns `false` when there was nothing to
    /// release (failed result, or already released).
    pub fn release(&self) -> bool {
        if self.image_url.is_empty() {
            return false;
        }
        object_url::revoke_object_url(&self.image_url)
    }
}
