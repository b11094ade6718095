//! Provides the RGBA drawing surface that diagrams are painted onto.

use bytemuck::{cast_slice, cast_slice_mut};
use log::trace;

use crate::{
  font::{glyph, lit_cells, GLYPH_ADVANCE},
  DocToolsError, Result, Rgba,
};

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// pixel index.
///
/// Multiply by 4 to get the byte offset of the pixel's red channel.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y as usize * width as usize + x as usize
}

/// An owned RGBA8 image that can be drawn on.
///
/// Pixels are stored as tightly packed `R, G, B, A` bytes, row by row from
/// the top left, which is already the byte order of PNG truecolor-with-alpha
/// scanlines.
///
/// All drawing is clipped: anything outside the canvas is silently dropped,
/// so callers can draw near or across the edges without checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Canvas {
  width: u32,
  height: u32,
  pixels: Vec<u8>,
}
impl Canvas {
  /// Makes a canvas uniformly filled with `background`.
  ///
  /// ## Failure
  /// * Zero width or height gives [`DocToolsError::WidthOrHeightZero`].
  /// * A byte size that can't be addressed gives
  ///   [`DocToolsError::DimensionsTooLarge`].
  pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(DocToolsError::WidthOrHeightZero);
    }
    let byte_len = (width as usize)
      .checked_mul(height as usize)
      .and_then(|px| px.checked_mul(4))
      .ok_or(DocToolsError::DimensionsTooLarge { width, height })?;
    let bg = [background.r, background.g, background.b, background.a];
    let mut pixels = Vec::new();
    pixels
      .try_reserve_exact(byte_len)
      .map_err(|_| DocToolsError::DimensionsTooLarge { width, height })?;
    for _ in 0..(byte_len / 4) {
      pixels.extend_from_slice(&bg);
    }
    trace!("new canvas {width}x{height}, {byte_len} bytes");
    Ok(Self { width, height, pixels })
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// The raw `RGBA` bytes of the whole image.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.pixels
  }

  /// Iterates the rows of the image, top to bottom, as `RGBA` bytes.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
    self.pixels.chunks_exact(self.width as usize * 4)
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
    if x < self.width && y < self.height {
      let px: &[[u8; 4]] = cast_slice(&self.pixels);
      let [r, g, b, a] = px[xy_width_to_index(x, y, self.width)];
      Some(Rgba { r, g, b, a })
    } else {
      None
    }
  }

  #[inline]
  fn get_mut(&mut self, x: i64, y: i64) -> Option<&mut [u8; 4]> {
    let x = u32::try_from(x).ok().filter(|x| *x < self.width)?;
    let y = u32::try_from(y).ok().filter(|y| *y < self.height)?;
    let i = xy_width_to_index(x, y, self.width);
    cast_slice_mut::<u8, [u8; 4]>(&mut self.pixels).get_mut(i)
  }

  #[inline]
  fn put(&mut self, x: i64, y: i64, color: Rgba) {
    if let Some(p) = self.get_mut(x, y) {
      *p = [color.r, color.g, color.b, color.a];
    }
  }

  /// Writes one pixel. Positions outside the canvas are ignored.
  #[inline]
  pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
    self.put(i64::from(x), i64::from(y), color)
  }

  /// Fills the half-open rectangle `[x0,x1) x [y0,y1)`.
  ///
  /// The part outside the canvas is clipped. If `x1 <= x0` or `y1 <= y0`
  /// nothing is drawn.
  pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    // clip first so that huge off-canvas rectangles stay cheap
    let cx0 = x0.max(0);
    let cy0 = y0.max(0);
    let cx1 = i64::from(x1).min(i64::from(self.width));
    let cy1 = i64::from(y1).min(i64::from(self.height));
    for y in i64::from(cy0)..cy1 {
      for x in i64::from(cx0)..cx1 {
        self.put(x, y, color);
      }
    }
  }

  /// Outlines the half-open rectangle `[x0,x1) x [y0,y1)` with a one pixel
  /// border.
  ///
  /// The border is row `y0`, row `y1 - 1`, column `x0`, and column `x1 - 1`.
  /// Clipping works the same as [`fill_rect`](Self::fill_rect).
  pub fn stroke_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    if x1 <= x0 || y1 <= y0 {
      return;
    }
    let w = i64::from(self.width);
    let h = i64::from(self.height);
    for x in x0.max(0)..x1.min(w) {
      self.put(x, y0, color);
      self.put(x, y1 - 1, color);
    }
    for y in y0.max(0)..y1.min(h) {
      self.put(x0, y, color);
      self.put(x1 - 1, y, color);
    }
  }

  /// Draws one line of text with the built-in [font](crate::font).
  ///
  /// `(x, y)` is the top left of the first glyph. Text is folded to uppercase
  /// first. Every lit glyph cell becomes a `scale x scale` block, and the
  /// cursor moves right by `4 * scale` per character, including characters
  /// the font has no glyph for (those just leave a gap).
  ///
  /// Returns the cursor position after the last character.
  pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba, scale: u32) -> i32 {
    let scale_i = i64::from(scale);
    let advance = i64::from(GLYPH_ADVANCE) * scale_i;
    let (w, h) = (i64::from(self.width), i64::from(self.height));
    let y = i64::from(y);
    let mut cursor = i64::from(x);
    for ch in text.chars().flat_map(char::to_uppercase) {
      if let Some(g) = glyph(ch) {
        for (gx, gy) in lit_cells(g) {
          let px = cursor + i64::from(gx) * scale_i;
          let py = y + i64::from(gy) * scale_i;
          // only the on-canvas part of each cell block is visited
          for yy in py.max(0)..(py + scale_i).min(h) {
            for xx in px.max(0)..(px + scale_i).min(w) {
              self.put(xx, yy, color);
            }
          }
        }
      }
      cursor += advance;
    }
    cursor.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
  }
}

/// How many pixels wide [`Canvas::draw_text`] will make this text.
///
/// This counts the trailing spacing column of the last character too.
#[inline]
#[must_use]
pub fn text_width(text: &str, scale: u32) -> u32 {
  let chars = text.chars().flat_map(char::to_uppercase).count();
  u32::try_from(chars).unwrap_or(u32::MAX).saturating_mul(GLYPH_ADVANCE).saturating_mul(scale)
}
