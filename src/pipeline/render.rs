//! First-page rasterisation: bytes → drawing surface via the renderer.
//!
//! ## Why spawn_blocking?
//!
//! The default renderer wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. `tokio::task::spawn_blocking` moves the work onto a dedicated
//! thread pool thread designed for blocking operations, preventing the
//! Tokio worker threads from stalling during CPU-heavy rendering.

use crate::config::{ConversionConfig, RENDER_SCALE};
use crate::error::Pdf2ImgError;
use crate::renderer::{self, DocumentRenderer};
use crate::surface::Surface;
use std::sync::Arc;
use tracing::debug;

/// Rasterise page 0 of `bytes` at the fixed scale onto a fresh surface.
///
/// This runs inside `spawn_blocking` since engine operations are CPU-bound.
pub async fn render_first_page(
    bytes: Vec<u8>,
    config: &ConversionConfig,
) -> Result<Surface, Pdf2ImgError> {
    let renderer = resolve_renderer(config)?;
    let password = config.password.clone();

    tokio::task::spawn_blocking(move || {
        render_first_page_blocking(renderer.as_ref(), &bytes, password.as_deref())
    })
    .await
    .map_err(|e| Pdf2ImgError::Internal(format!("Render task panicked: {e}")))?
}

/// Blocking implementation of first-page rendering.
fn render_first_page_blocking(
    renderer: &dyn DocumentRenderer,
    bytes: &[u8],
    password: Option<&str>,
) -> Result<Surface, Pdf2ImgError> {
    let document = renderer.open(bytes, password)?;
    debug!("document opened: {} pages", document.page_count());

    // No zero-page handling: fetching page 0 of an empty document surfaces
    // whatever the engine reports, as a conversion error.
    let page = document.page(0)?;

    let viewport = page.viewport(RENDER_SCALE);
    let mut surface = Surface::new(viewport.pixel_width(), viewport.pixel_height())?;
    page.render_to_surface(&mut surface, &viewport)?;

    Ok(surface)
}

/// Resolve the renderer, from most-specific to least-specific:
///
/// 1. **Pre-built renderer** (`config.renderer`) — the caller supplied one;
///    used as-is. This is how tests run the pipeline without a pdfium
///    library present.
/// 2. **Shared pdfium renderer** — the process-wide binding, initialised
///    lazily on first use (`PDFIUM_LIB_PATH` honoured).
fn resolve_renderer(config: &ConversionConfig) -> Result<Arc<dyn DocumentRenderer>, Pdf2ImgError> {
    if let Some(ref renderer) = config.renderer {
        return Ok(Arc::clone(renderer));
    }
    renderer::shared_renderer()
}
