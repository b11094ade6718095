use std::path::PathBuf;

use thiserror::Error;

/// Shorthand for results carrying a [`DocToolsError`].
pub type Result<T> = core::result::Result<T, DocToolsError>;

/// An error from the `doctools` crate.
///
/// Drawing never fails: pixels outside the canvas and characters without a
/// glyph are skipped silently. Errors only come from building a canvas, from
/// locating the TOC markers, and from the filesystem.
#[derive(Debug, Error)]
pub enum DocToolsError {
  /// The requested width and/or height of a canvas is 0.
  #[error("canvas width and height must both be non-zero")]
  WidthOrHeightZero,

  /// The canvas byte size doesn't fit in memory.
  #[error("canvas dimensions {width}x{height} are too large")]
  DimensionsTooLarge { width: u32, height: u32 },

  /// The Markdown document to rewrite doesn't exist.
  #[error("{} not found", .0.display())]
  DocumentNotFound(PathBuf),

  /// No line matched the `<!-- TOC START` marker.
  #[error("TOC start marker not found")]
  MissingStartMarker,

  /// A start marker was found but no `TOC END -->` line follows it.
  #[error("TOC end marker not found after the start marker")]
  MissingEndMarker,

  /// A custom marker pattern failed to compile.
  #[cfg(feature = "toc")]
  #[error("invalid TOC marker pattern: {0}")]
  InvalidMarker(#[from] regex::Error),

  /// A chunk read back from PNG output is truncated or fails its CRC.
  #[error("PNG chunk {chunk_type} is corrupt")]
  CorruptChunk { chunk_type: String },

  /// The document would change but we were asked only to check it.
  #[error("{} is out of date", .0.display())]
  OutOfDate(PathBuf),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Persist(#[from] tempfile::PersistError),
}
