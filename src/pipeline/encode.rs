//! Surface serialisation: drawing surface → compressed PNG byte stream.
//!
//! PNG is the only output format: lossless compression keeps rendered text
//! crisp, and the fixed MIME type keeps the output contract trivial.

use crate::error::Pdf2ImgError;
use crate::surface::Surface;
use tracing::debug;

/// Serialise a rendered surface to PNG bytes.
///
/// An empty stream is a failure ([`Pdf2ImgError::EmptyEncode`]) — the
/// serialisation step yielding nothing means there is no image to hand out.
pub fn encode_surface(surface: &Surface) -> Result<Vec<u8>, Pdf2ImgError> {
    let png = surface.to_png()?;
    if png.is_empty() {
        return Err(Pdf2ImgError::EmptyEncode);
    }
    debug!("encoded {}x{} surface → {} PNG bytes", surface.width(), surface.height(), png.len());
    Ok(png)
}
