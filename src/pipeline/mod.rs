//! Pipeline stages for PDF-to-PNG conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──────▶ render ──────▶ encode
//! (name+bytes)  (first page    (surface
//!                → surface)     → PNG bytes)
//! ```
//!
//! 1. [`input`]  — the caller-supplied document (filename + bytes) and
//!    output-name derivation
//! 2. [`render`] — rasterise page 0 at the fixed 2× scale; runs in
//!    `spawn_blocking` because pdfium is not async-safe
//! 3. [`encode`] — serialise the drawing surface to a compressed PNG stream

pub mod encode;
pub mod input;
pub mod render;
