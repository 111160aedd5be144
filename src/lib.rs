//! # pdf2img
//!
//! Render the first page of a PDF document to a PNG image.
//!
//! ## Why this crate?
//!
//! Document pickers, upload forms, and preview panes all need the same
//! thing from a PDF: one raster image of the first page, plus a name to
//! save it under. This crate does exactly that — no multi-page output, no
//! format negotiation — and reports every failure as data rather than a
//! fault, so a preview pane can show a message instead of crashing.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF bytes + filename
//!  │
//!  ├─ 1. Guard    environment capability check (no engine interaction on failure)
//!  ├─ 2. Render   open document, fetch page 0, rasterise at 2× (pdfium, spawn_blocking)
//!  ├─ 3. Encode   drawing surface → PNG byte stream
//!  └─ 4. Output   named `image/png` file + registered object URL
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2img::{convert, ConversionConfig, InputDocument};
//!
//! #[tokio::main]
//! async fn main() {
//!     let bytes = std::fs::read("report.pdf").unwrap();
//!     let doc = InputDocument::new("report.pdf", bytes);
//!
//!     let result = convert(&doc, &ConversionConfig::default()).await;
//!     match &result.file {
//!         Some(file) => println!("{} → {}", file.name, result.image_url),
//!         None => eprintln!("{}", result.error.as_deref().unwrap_or("?")),
//!     }
//!     result.release(); // pair every success with a release
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2img` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2img = { version = "0.1", default-features = false }
//! ```
//!
//! ## The result contract
//!
//! [`convert`] always returns a [`ConversionResult`]; exactly one of
//! `{file, error}` is populated, and `image_url` is non-empty iff `file`
//! is present. Successful results hold one entry in the process-wide
//! object-URL registry until [`ConversionResult::release`] is called.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod object_url;
pub mod output;
pub mod pipeline;
pub mod renderer;
pub mod surface;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, RenderEnvironment, RENDER_SCALE};
pub use convert::{convert, convert_file, convert_sync};
pub use error::Pdf2ImgError;
pub use object_url::{active_object_urls, create_object_url, resolve_object_url, revoke_object_url};
pub use output::{ConversionResult, OutputFile, PNG_MIME};
pub use pipeline::input::InputDocument;
pub use renderer::{Document, DocumentRenderer, Page, PdfiumRenderer, Viewport};
pub use surface::Surface;
