#![cfg_attr(docs_rs, feature(doc_cfg))]
#![forbid(unsafe_code)]

//! Documentation tooling for ChapterForge.
//!
//! Two independent pieces live here:
//!
//! * A tiny raster pipeline: draw boxes and fixed-font labels onto a
//!   [`Canvas`], then turn it into PNG bytes with [`png::encode`]. This is what
//!   renders the diagrams under `docs/diagrams/`.
//! * A README table of contents rewriter, [`toc::rewrite`], which regenerates
//!   the region between the `<!-- TOC START ... -->` and `<!-- TOC END -->`
//!   marker lines from the document's own headings.

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub use pixel_formats::r8g8b8a8_Srgb as Rgba;

mod error;
pub use error::*;

pub mod canvas;
pub use canvas::*;

pub mod font;

pub mod output;

#[cfg(feature = "png")]
#[cfg_attr(docs_rs, doc(cfg(feature = "png")))]
pub mod png;

pub mod diagrams;

#[cfg(feature = "toc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "toc")))]
pub mod toc;
