use super::*;

/// A four letter chunk type tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl PngChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
}
impl Debug for PngChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for b in self.0 {
      f.write_char(b as char)?;
    }
    Ok(())
  }
}
impl core::fmt::Display for PngChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(self, f)
  }
}

/// Appends one framed chunk to `out`.
///
/// The framing is: big-endian data length, the type tag, the data, and then
/// the big-endian CRC of type plus data.
///
/// ## Panics
/// * If `data` is longer than `u32::MAX` bytes, which PNG can't express.
pub fn write_chunk(out: &mut Vec<u8>, chunk_type: PngChunkType, data: &[u8]) {
  let len = u32::try_from(data.len()).expect("chunk data longer than u32::MAX");
  out.reserve(12 + data.len());
  out.extend_from_slice(&len.to_be_bytes());
  out.extend_from_slice(&chunk_type.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&chunk_crc(chunk_type.0, data).to_be_bytes());
}

/// An unparsed chunk read back out of PNG bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  pub chunk_type: PngChunkType,
  pub data: &'b [u8],
  pub declared_crc: u32,
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("chunk_type", &self.chunk_type)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl PngRawChunk<'_> {
  /// Computes the CRC that the chunk *should* have.
  #[inline]
  #[must_use]
  pub fn actual_crc(&self) -> u32 {
    chunk_crc(self.chunk_type.0, self.data)
  }

  #[inline]
  #[must_use]
  pub fn crc_matches(&self) -> bool {
    self.actual_crc() == self.declared_crc
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Iteration stops at the first chunk that's cut short. Nothing here checks
/// CRCs or chunk order; see [`PngRawChunk::crc_matches`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngRawChunkIter<'b>(&'b [u8]);
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, it will skip the signature automatically.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }

  /// Bytes left over after the chunks iterated so far.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.0
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngRawChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let (len_bytes, rest) = self.0.split_first_chunk::<4>()?;
    let (type_bytes, rest) = rest.split_first_chunk::<4>()?;
    let chunk_len = u32::from_be_bytes(*len_bytes) as usize;
    if rest.len() < chunk_len {
      return None;
    }
    let (data, rest) = rest.split_at(chunk_len);
    let (crc_bytes, rest) = rest.split_first_chunk::<4>()?;
    self.0 = rest;
    Some(PngRawChunk {
      chunk_type: PngChunkType(*type_bytes),
      data,
      declared_crc: u32::from_be_bytes(*crc_bytes),
    })
  }
}
