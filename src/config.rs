//! Configuration types for PDF-to-PNG conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across threads and to inject test doubles
//! (a mock renderer, a capability-stripped environment) without touching the
//! pipeline code.
//!
//! # Design choice: capability object over ambient check
//! The converter does not probe globals to decide whether rendering is
//! possible. [`RenderEnvironment`] is an explicit, injectable capability
//! object: production callers use [`RenderEnvironment::detect`], tests use
//! [`RenderEnvironment::headless`] to exercise the unsupported path without
//! any engine interaction.

use crate::renderer::DocumentRenderer;
use std::fmt;
use std::sync::Arc;

/// Magnification applied to a page's intrinsic dimensions when rasterising.
///
/// Fixed by contract: output pixel dimensions are always the page size in
/// points times this factor, floored. A 612×792 pt US-Letter page renders to
/// 1224×1584 px.
pub const RENDER_SCALE: f32 = 2.0;

/// Capability object describing whether page rasterisation is available.
///
/// Replaces an ambient "is a rendering context present" runtime check with a
/// value the caller passes in, so "supported vs unsupported" is a testable
/// parameter rather than a property of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEnvironment {
    rendering: bool,
}

impl RenderEnvironment {
    /// Detect the capabilities of the current process.
    ///
    /// Native builds always carry the rasterisation code path; whether a
    /// pdfium library can actually be bound is only knowable by trying, and
    /// that failure surfaces later as a binding error. Detection therefore
    /// reports the capability as present.
    pub fn detect() -> Self {
        Self { rendering: true }
    }

    /// An environment without rasterisation capability.
    ///
    /// Conversions under this environment fail immediately with
    /// [`crate::error::Pdf2ImgError::EnvironmentUnsupported`], before any
    /// engine interaction.
    pub fn headless() -> Self {
        Self { rendering: false }
    }

    /// Whether page rasterisation may be attempted.
    pub fn supports_rendering(&self) -> bool {
        self.rendering
    }
}

impl Default for RenderEnvironment {
    fn default() -> Self {
        Self::detect()
    }
}

/// Configuration for a PDF-to-PNG conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2img::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .password("s3cret")
///     .build();
/// ```
#[derive(Clone, Default)]
pub struct ConversionConfig {
    /// Pre-constructed document renderer. When `None`, the process-wide
    /// lazily-initialised pdfium renderer is used.
    pub renderer: Option<Arc<dyn DocumentRenderer>>,

    /// Capability object for this conversion. Default: [`RenderEnvironment::detect`].
    pub environment: RenderEnvironment,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("renderer", &self.renderer.as_ref().map(|_| "<dyn DocumentRenderer>"))
            .field("environment", &self.environment)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    /// Inject a pre-built renderer (tests, embedders with their own engine).
    pub fn renderer(mut self, renderer: Arc<dyn DocumentRenderer>) -> Self {
        self.config.renderer = Some(renderer);
        self
    }

    pub fn environment(mut self, env: RenderEnvironment) -> Self {
        self.config.environment = env;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ConversionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_supports_rendering() {
        let config = ConversionConfig::default();
        assert!(config.environment.supports_rendering());
        assert!(config.renderer.is_none());
    }

    #[test]
    fn headless_environment_does_not() {
        assert!(!RenderEnvironment::headless().supports_rendering());
    }

    #[test]
    fn builder_sets_fields() {
        let config = ConversionConfig::builder()
            .environment(RenderEnvironment::headless())
            .password("pw")
            .build();
        assert!(!config.environment.supports_rendering());
        assert_eq!(config.password.as_deref(), Some("pw"));
    }

    #[test]
    fn debug_redacts_password() {
        let config = ConversionConfig::builder().password("hunter2").build();
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("hunter2"));
    }
}
