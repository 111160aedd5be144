//! In-memory drawing surface: the off-screen canvas pages are rendered onto.
//!
//! A [`Surface`] is an owned RGBA pixel buffer sized to a viewport's floored
//! pixel dimensions. The engine draws into it via [`Surface::blit`]; the
//! encode stage serialises it with [`Surface::to_png`]. Each conversion
//! allocates its own surface, so concurrent conversions never share pixels.

use crate::error::Pdf2ImgError;
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use std::io::Cursor;

/// An in-memory RGBA drawing surface.
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Allocate a surface filled with opaque white.
    ///
    /// # Errors
    /// [`Pdf2ImgError::Surface`] when either dimension is zero — a degenerate
    /// page whose floored viewport collapses cannot back a drawing surface.
    pub fn new(width: u32, height: u32) -> Result<Self, Pdf2ImgError> {
        if width == 0 || height == 0 {
            return Err(Pdf2ImgError::Surface { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Draw `rendered` onto the surface at the origin, clipped to the
    /// surface bounds. Engine bitmaps may differ from the floored viewport
    /// by a row or column of rounding; clipping keeps the surface dimensions
    /// authoritative.
    pub fn blit(&mut self, rendered: &DynamicImage) {
        imageops::replace(&mut self.image, &rendered.to_rgba8(), 0, 0);
    }

    /// Serialise the surface to a compressed PNG byte stream.
    pub fn to_png(&self) -> Result<Vec<u8>, Pdf2ImgError> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(self.image.clone())
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| Pdf2ImgError::Internal(format!("PNG serialisation failed: {e}")))?;
        Ok(buf)
    }
}
