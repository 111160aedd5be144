//! Input documents and output-name derivation.
//!
//! The converter takes its input fully in memory: an opaque byte buffer plus
//! the filename it arrived with (the name drives the output name, nothing
//! else). There is deliberately no PDF validation here — not even a magic
//! byte check. Malformed input must surface as the engine's own diagnostic,
//! passed through the conversion error, rather than as a second, competing
//! validation layer.

use crate::error::Pdf2ImgError;
use std::path::Path;
use tracing::debug;

/// An in-memory document to convert: opaque bytes plus a filename.
///
/// Owned by the caller; the converter borrows it for the duration of the
/// call and performs no mutation.
#[derive(Debug, Clone)]
pub struct InputDocument {
    /// Filename the bytes arrived with, e.g. `"report.pdf"`.
    pub name: String,
    /// Raw document bytes.
    pub bytes: Vec<u8>,
}

impl InputDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a document from disk, using the path's filename component.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Pdf2ImgError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(Pdf2ImgError::PermissionDenied {
                    path: path.to_path_buf(),
                });
            }
            Err(_) => {
                return Err(Pdf2ImgError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(Self { name, bytes })
    }
}

/// Derive the output filename: strip one trailing case-insensitive `.pdf`
/// suffix and append `.png`. Names without the suffix get `.png` appended
/// whole.
pub fn output_name(input_name: &str) -> String {
    let n = input_name.len();
    let stem = if n >= 4
        && input_name.is_char_boundary(n - 4)
        && input_name[n - 4..].eq_ignore_ascii_case(".pdf")
    {
        &input_name[..n - 4]
    } else {
        input_name
    };
    format!("{stem}.png")
}
