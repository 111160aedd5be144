//! Document-rendering capability interface and its pdfium implementation.
//!
//! ## Why a trait instead of direct pdfium calls?
//!
//! The engine is the heavyweight piece of this crate: binding a native
//! pdfium library, parsing, rasterising. Putting those capabilities behind
//! [`DocumentRenderer`] / [`Document`] / [`Page`] keeps the pipeline
//! testable without a pdfium library on the machine (tests inject a mock),
//! and lets embedders that already hold an engine instance supply their own.
//!
//! ## Why a process-wide lazy singleton?
//!
//! Binding pdfium means loading a shared library and initialising its
//! global state. [`shared_renderer`] does this once, on first use, and every
//! subsequent conversion reuses the binding. Conversions that never reach
//! the engine (capability guard, injected renderer) never trigger it.

use crate::error::Pdf2ImgError;
use crate::surface::Surface;
use once_cell::sync::OnceCell;
use pdfium_render::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// The pixel-space rectangle and scale at which a page is rasterised.
///
/// Width and height are the page's intrinsic dimensions (points) multiplied
/// by `scale`; the backing surface uses the floored pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Viewport {
    pub fn pixel_width(&self) -> u32 {
        self.width.max(0.0).floor() as u32
    }

    pub fn pixel_height(&self) -> u32 {
        self.height.max(0.0).floor() as u32
    }
}

/// Open-from-bytes capability of a document-rendering engine.
pub trait DocumentRenderer: Send + Sync {
    /// Open a document from an in-memory byte buffer.
    ///
    /// The buffer is borrowed for the lifetime of the returned document and
    /// never mutated. Errors are the engine's own diagnostics, passed
    /// through unrefined.
    fn open<'a>(
        &'a self,
        bytes: &'a [u8],
        password: Option<&str>,
    ) -> Result<Box<dyn Document + 'a>, Pdf2ImgError>;
}

/// An opened document: page access.
pub trait Document {
    fn page_count(&self) -> usize;

    /// Fetch a page by 0-based index. Out-of-range indices (including page 0
    /// of a zero-page document) surface as the engine's own error.
    fn page(&self, index: usize) -> Result<Box<dyn Page + '_>, Pdf2ImgError>;
}

/// A single page: intrinsic dimensions, viewport computation, rasterisation.
pub trait Page {
    /// Intrinsic width in PDF points (1 pt = 1/72 in).
    fn width(&self) -> f32;

    /// Intrinsic height in PDF points.
    fn height(&self) -> f32;

    /// Compute the rendering viewport at the given magnification.
    fn viewport(&self, scale: f32) -> Viewport {
        Viewport {
            width: self.width() * scale,
            height: self.height() * scale,
            scale,
        }
    }

    /// Rasterise the page onto `surface` at the viewport's dimensions.
    fn render_to_surface(
        &self,
        surface: &mut Surface,
        viewport: &Viewport,
    ) -> Result<(), Pdf2ImgError>;
}

// ── Pdfium implementation ────────────────────────────────────────────────

/// [`DocumentRenderer`] backed by the pdfium library.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Bind to a pdfium library.
    ///
    /// Resolution order: `PDFIUM_LIB_PATH` if set, then a platform-named
    /// library next to the executable's working directory, then the system
    /// library.
    pub fn new() -> Result<Self, Pdf2ImgError> {
        let bindings = match std::env::var("PDFIUM_LIB_PATH") {
            Ok(path) if !path.is_empty() => Pdfium::bind_to_library(&path),
            _ => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library()),
        }
        .map_err(|e| Pdf2ImgError::PdfiumBindingFailed(format!("{e:?}")))?;

        debug!("pdfium library bound");
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl DocumentRenderer for PdfiumRenderer {
    fn open<'a>(
        &'a self,
        bytes: &'a [u8],
        password: Option<&str>,
    ) -> Result<Box<dyn Document + 'a>, Pdf2ImgError> {
        let doc = self
            .pdfium
            .load_pdf_from_byte_slice(bytes, password)
            .map_err(|e| Pdf2ImgError::Engine {
                detail: format!("{e:?}"),
            })?;
        Ok(Box::new(PdfiumDocument { doc }))
    }
}

struct PdfiumDocument<'a> {
    doc: PdfDocument<'a>,
}

impl Document for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.doc.pages().len() as usize
    }

    fn page(&self, index: usize) -> Result<Box<dyn Page + '_>, Pdf2ImgError> {
        let page = self
            .doc
            .pages()
            .get(index as u16)
            .map_err(|e| Pdf2ImgError::Engine {
                detail: format!("{e:?}"),
            })?;
        Ok(Box::new(PdfiumPage { page }))
    }
}

struct PdfiumPage<'a> {
    page: PdfPage<'a>,
}

impl Page for PdfiumPage<'_> {
    fn width(&self) -> f32 {
        self.page.width().value
    }

    fn height(&self) -> f32 {
        self.page.height().value
    }

    fn render_to_surface(
        &self,
        surface: &mut Surface,
        viewport: &Viewport,
    ) -> Result<(), Pdf2ImgError> {
        let render_config = PdfRenderConfig::new()
            .set_target_width(viewport.pixel_width() as i32)
            .set_target_height(viewport.pixel_height() as i32);

        let bitmap =
            self.page
                .render_with_config(&render_config)
                .map_err(|e| Pdf2ImgError::Engine {
                    detail: format!("{e:?}"),
                })?;

        surface.blit(&bitmap.as_image());
        debug!(
            "rendered page onto {}x{} px surface at {}x",
            surface.width(),
            surface.height(),
            viewport.scale
        );
        Ok(())
    }
}

// ── Shared renderer ──────────────────────────────────────────────────────

static SHARED_RENDERER: OnceCell<Arc<PdfiumRenderer>> = OnceCell::new();

/// The process-wide pdfium renderer, bound on first use.
///
/// Binding failures are not cached; a later call retries (e.g. after the
/// caller sets `PDFIUM_LIB_PATH` and the first attempt failed).
pub fn shared_renderer() -> Result<Arc<dyn DocumentRenderer>, Pdf2ImgError> {
    let renderer = SHARED_RENDERER.get_or_try_init(|| PdfiumRenderer::new().map(Arc::new))?;
    Ok(Arc::clone(renderer) as Arc<dyn DocumentRenderer>)
}
