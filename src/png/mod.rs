#![forbid(unsafe_code)]

//! Module for writing PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! Only one kind of PNG is ever written: 8 bits per channel RGBA, not
//! interlaced, every scanline using filter type 0. That's the simplest layout
//! any decoder has to accept, and since diagrams are mostly flat color the
//! zlib stream stays small even without smarter filtering.
//!
//! ## Layout
//!
//! ```text
//! 89 50 4E 47 0D 0A 1A 0A        signature
//! [len][IHDR][13 bytes][crc]     width, height, 8, 6, 0, 0, 0
//! [len][IDAT][zlib data][crc]    one chunk, all scanlines
//! [len][IEND][][crc]             empty
//! ```
//!
//! Each scanline in the zlib data is a `0` filter byte and then the row's
//! pixels, see [`filter_scanlines`].
//!
//! ## Reading Back
//!
//! [`PngRawChunkIter`] walks the chunk framing of any PNG bytes. That's enough
//! to check a file we just wrote (chunk order and CRCs) without pulling in a
//! decoder.

use core::fmt::{Debug, Write};

use log::debug;
use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::Canvas;

mod crc32;
pub use crc32::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod encode;
pub use encode::*;


/// The first eight bytes of every PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Filter type byte for "no filtering".
pub const FILTER_NONE: u8 = 0;

/// Checks if the PNG's initial 8 bytes are the correct signature.
#[inline]
#[must_use]
pub fn is_png_signature_correct(bytes: &[u8]) -> bool {
  bytes.starts_with(&PNG_SIGNATURE)
}

/// Walks the chunks of PNG bytes we produced and confirms the overall shape:
/// correct signature, exactly one `IHDR` and it comes first, `IEND` last with
/// nothing after it, and every CRC matching.
///
/// Returns the parsed header.
pub fn verify_chunks(bytes: &[u8]) -> crate::Result<IHDR> {
  let corrupt = |t: &str| crate::DocToolsError::CorruptChunk { chunk_type: t.to_string() };
  if !is_png_signature_correct(bytes) {
    return Err(corrupt("signature"));
  }
  let mut it = PngRawChunkIter::new(bytes);
  let mut ihdr = None;
  let mut saw_iend = false;
  for chunk in it.by_ref() {
    let name = chunk.chunk_type.to_string();
    if saw_iend || !chunk.crc_matches() {
      return Err(corrupt(&name));
    }
    match chunk.chunk_type {
      PngChunkType::IHDR if ihdr.is_none() => {
        ihdr = Some(IHDR::try_from(chunk.data).map_err(|_| corrupt(&name))?);
      }
      PngChunkType::IHDR => return Err(corrupt(&name)),
      _ if ihdr.is_none() => return Err(corrupt(&name)),
      PngChunkType::IEND => saw_iend = true,
      _ => (),
    }
  }
  if !saw_iend || !it.remaining().is_empty() {
    return Err(corrupt("IEND"));
  }
  ihdr.ok_or_else(|| corrupt("IHDR"))
}
