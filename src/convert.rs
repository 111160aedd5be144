//! Conversion entry points.
//!
//! ## The boundary contract
//!
//! [`convert`] never fails in the `Result` sense: every error — unsupported
//! environment, engine diagnostics, surface allocation, empty serialisation —
//! is caught here and folded into the [`ConversionResult`] shape. Callers
//! branch on the presence of `error` vs `file`. There are no retries, no
//! timeouts, and no cancellation: a conversion runs to completion or
//! failure.
//!
//! [`convert_file`] is the file-to-file convenience used by the CLI and
//! keeps the conventional `Result` contract, since a missing input file or
//! an unwritable output directory is fatal for its caller anyway.

use crate::config::ConversionConfig;
use crate::error::Pdf2ImgError;
use crate::object_url;
use crate::output::{ConversionResult, OutputFile, PNG_MIME};
use crate::pipeline::{encode, input, render};
use crate::pipeline::input::InputDocument;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Convert the first page of an in-memory PDF document to a PNG image.
///
/// This is the primary entry point for the library.
///
/// On success the result carries the PNG as a named [`OutputFile`] plus an
/// object URL referencing the same bytes; pair every successful result with
/// [`ConversionResult::release`] once the URL is no longer needed.
///
/// # Example
/// ```rust,no_run
/// use pdf2img::{convert, ConversionConfig, InputDocument};
///
/// # #[tokio::main]
/// # async fn main() {
/// let bytes = std::fs::read("report.pdf").unwrap();
/// let doc = InputDocument::new("report.pdf", bytes);
/// let result = convert(&doc, &ConversionConfig::default()).await;
/// match &result.file {
///     Some(file) => println!("{} ({} bytes) at {}", file.name, file.bytes.len(), result.image_url),
///     None => eprintln!("{}", result.error.as_deref().unwrap_or("unknown error")),
/// }
/// result.release();
/// # }
/// ```
pub async fn convert(document: &InputDocument, config: &ConversionConfig) -> ConversionResult {
    // Capability guard: reported as data, before any engine interaction.
    if !config.environment.supports_rendering() {
        return ConversionResult::failure(Pdf2ImgError::EnvironmentUnsupported);
    }

    match convert_inner(document, config).await {
        Ok(result) => result,
        Err(e) => {
            warn!("conversion of '{}' failed: {e}", document.name);
            ConversionResult::failure(e)
        }
    }
}

async fn convert_inner(
    document: &InputDocument,
    config: &ConversionConfig,
) -> Result<ConversionResult, Pdf2ImgError> {
    let start = Instant::now();
    info!("converting '{}' ({} bytes)", document.name, document.bytes.len());

    let surface = render::render_first_page(document.bytes.clone(), config).await?;
    let png = encode::encode_surface(&surface)?;

    let name = input::output_name(&document.name);
    let image_url = object_url::create_object_url(&png);

    info!(
        "converted '{}' → '{}' ({}x{} px, {} bytes) in {}ms",
        document.name,
        name,
        surface.width(),
        surface.height(),
        png.len(),
        start.elapsed().as_millis()
    );

    Ok(ConversionResult::success(
        OutputFile {
            bytes: png,
            name,
            mime_type: PNG_MIME.to_string(),
        },
        image_url,
    ))
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(document: &InputDocument, config: &ConversionConfig) -> ConversionResult {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(convert(document, config)),
        Err(e) => ConversionResult::failure(Pdf2ImgError::Internal(format!(
            "Failed to create tokio runtime: {e}"
        ))),
    }
}

/// Convert a PDF file on disk and write the PNG next to it (or to `output`).
///
/// Uses atomic write (temp file + rename) to prevent partial files. The
/// object URL allocated by the conversion is released before returning;
/// file-based callers only want the bytes on disk.
///
/// # Errors
/// Fatal errors only: input unreadable, conversion failed, output
/// unwritable.
pub async fn convert_file(
    input_path: impl AsRef<Path>,
    output_path: Option<&Path>,
    config: &ConversionConfig,
) -> Result<PathBuf, Pdf2ImgError> {
    let input_path = input_path.as_ref();
    let document = InputDocument::from_file(input_path)?;

    let result = convert(&document, config).await;
    let file = match result.file {
        Some(ref file) => file,
        None => {
            return Err(Pdf2ImgError::Engine {
                detail: result
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown conversion failure".to_string()),
            });
        }
    };

    let out_path = match output_path {
        Some(p) => p.to_path_buf(),
        None => input_path.with_file_name(&file.name),
    };

    let write_err = |source: std::io::Error| Pdf2ImgError::OutputWriteFailed {
        path: out_path.clone(),
        source,
    };

    // Temp file in the destination directory so the final rename never
    // crosses a filesystem boundary.
    let dir = out_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&file.bytes).map_err(write_err)?;
    tmp.persist(&out_path).map_err(|e| write_err(e.error))?;

    result.release();
    info!("wrote {} ({} bytes)", out_path.display(), file.bytes.len());
    Ok(out_path)
}
