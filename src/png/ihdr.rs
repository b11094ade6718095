use super::*;

/// Image Header.
///
/// Always the first chunk. The encoder only ever writes 8-bit RGBA,
/// non-interlaced images, but any header body can be parsed back for
/// inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  pub width: u32,
  pub height: u32,
  pub bit_depth: u8,
  pub color_type: u8,
  pub compression_method: u8,
  pub filter_method: u8,
  pub interlace_method: u8,
}
impl IHDR {
  /// Byte length of the chunk body.
  pub const LEN: usize = 13;

  /// Color type 6: red, green, blue, and alpha samples.
  pub const COLOR_TYPE_RGBA: u8 = 6;

  /// A header for 8 bits per channel RGBA data, no interlacing.
  #[inline]
  #[must_use]
  pub const fn rgba8(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      bit_depth: 8,
      color_type: Self::COLOR_TYPE_RGBA,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }

  /// Serializes the chunk body.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; Self::LEN] {
    let mut out = [0; Self::LEN];
    out[0..4].copy_from_slice(&self.width.to_be_bytes());
    out[4..8].copy_from_slice(&self.height.to_be_bytes());
    out[8] = self.bit_depth;
    out[9] = self.color_type;
    out[10] = self.compression_method;
    out[11] = self.filter_method;
    out[12] = self.interlace_method;
    out
  }

  /// Bytes in one filtered scanline: the filter type byte plus the pixels.
  #[inline]
  #[must_use]
  pub const fn bytes_per_filterline(&self) -> usize {
    1 + self.width as usize * 4
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = ();
  #[inline]
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] => {
        Ok(Self {
          width: u32::from_be_bytes([*w0, *w1, *w2, *w3]),
          height: u32::from_be_bytes([*h0, *h1, *h2, *h3]),
          bit_depth: *bit_depth,
          color_type: *color_type,
          compression_method: *compression_method,
          filter_method: *filter_method,
          interlace_method: *interlace_method,
        })
      }
      _ => Err(()),
    }
  }
}
