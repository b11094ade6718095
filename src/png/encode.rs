use super::*;

/// Knobs for [`encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
  /// Zlib compression level, `0` (store only) through `10` (slowest).
  ///
  /// Only output size changes with this, the decoded pixels are always
  /// identical. Values above 10 are treated as 10.
  pub compression_level: u8,
}
impl Default for EncodeOptions {
  #[inline]
  fn default() -> Self {
    Self { compression_level: 9 }
  }
}

/// Lays out the canvas rows as PNG filter lines, every one using filter type
/// 0 ("None").
///
/// The output is `height * (1 + width * 4)` bytes: a zero byte in front of
/// each row's `RGBA` data.
#[must_use]
pub fn filter_scanlines(canvas: &Canvas) -> Vec<u8> {
  let ihdr = IHDR::rgba8(canvas.width(), canvas.height());
  let mut raw = Vec::with_capacity(ihdr.bytes_per_filterline() * canvas.height() as usize);
  for row in canvas.rows() {
    raw.push(FILTER_NONE);
    raw.extend_from_slice(row);
  }
  raw
}

/// Encodes the canvas as PNG file bytes using [`EncodeOptions::default`].
#[inline]
#[must_use]
pub fn encode(canvas: &Canvas) -> Vec<u8> {
  encode_with(canvas, EncodeOptions::default())
}

/// Encodes the canvas as PNG file bytes.
///
/// The output is the signature followed by exactly three chunks: `IHDR`
/// (8-bit RGBA, no interlace), a single `IDAT` holding the whole zlib stream,
/// and an empty `IEND`.
#[must_use]
pub fn encode_with(canvas: &Canvas, options: EncodeOptions) -> Vec<u8> {
  let ihdr = IHDR::rgba8(canvas.width(), canvas.height());
  let raw = filter_scanlines(canvas);
  let level = options.compression_level.min(10);
  let compressed = compress_to_vec_zlib(&raw, level);
  debug!(
    "encoding {}x{}: {} filtered bytes -> {} compressed (level {level})",
    ihdr.width,
    ihdr.height,
    raw.len(),
    compressed.len()
  );

  let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + IHDR::LEN + compressed.len());
  out.extend_from_slice(&PNG_SIGNATURE);
  write_chunk(&mut out, PngChunkType::IHDR, &ihdr.to_bytes());
  write_chunk(&mut out, PngChunkType::IDAT, &compressed);
  write_chunk(&mut out, PngChunkType::IEND, &[]);
  out
}
