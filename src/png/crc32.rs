//! The CRC-32 used by PNG chunks (ISO 3309 / ITU-T V.42, same as zlib).

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

#[inline]
fn update_crc(mut crc: u32, bytes: &[u8]) -> u32 {
  for &byte in bytes {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// CRC-32 of a plain byte slice.
#[inline]
#[must_use]
pub fn png_crc(bytes: &[u8]) -> u32 {
  update_crc(u32::MAX, bytes) ^ u32::MAX
}

/// The CRC stored at the end of a chunk: it covers the chunk type and then
/// the chunk data, but not the length.
#[inline]
#[must_use]
pub fn chunk_crc(chunk_type: [u8; 4], data: &[u8]) -> u32 {
  update_crc(update_crc(u32::MAX, &chunk_type), data) ^ u32::MAX
}
