use doctools::{
  diagrams,
  png::{encode, encode_with, verify_chunks, EncodeOptions, PngChunkType, PngRawChunkIter},
  Canvas, Rgba,
};

const RED: Rgba = Rgba { r: 255, g: 0, b: 0, a: 255 };

/// Decodes with the `png` crate: `(width, height, rgba bytes)`.
fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
  let decoder = png_decoder::Decoder::new(bytes);
  let mut reader = decoder.read_info().unwrap();
  let mut buf = vec![0; reader.output_buffer_size()];
  let info = reader.next_frame(&mut buf).unwrap();
  assert_eq!(info.color_type, png_decoder::ColorType::Rgba);
  assert_eq!(info.bit_depth, png_decoder::BitDepth::Eight);
  buf.truncate(info.buffer_size());
  (info.width, info.height, buf)
}

#[test]
fn test_red_10x10_decodes() {
  let canvas = Canvas::new(10, 10, RED).unwrap();
  let (w, h, pixels) = decode(&encode(&canvas));
  assert_eq!((w, h), (10, 10));
  assert_eq!(pixels.len(), 10 * 10 * 4);
  assert!(pixels.chunks(4).all(|p| p == [255, 0, 0, 255]));
}

#[test]
fn test_one_pixel_canvas() {
  let canvas = Canvas::new(1, 1, Rgba { r: 1, g: 2, b: 3, a: 0 }).unwrap();
  let (w, h, pixels) = decode(&encode(&canvas));
  assert_eq!((w, h, pixels), (1, 1, vec![1, 2, 3, 0]));
}

#[test]
fn test_random_canvases_round_trip() {
  super::init_logging();
  for _ in 0..10 {
    let dims = super::rand_bytes(2);
    let width = u32::from(dims[0] % 40) + 1;
    let height = u32::from(dims[1] % 40) + 1;
    let mut canvas = Canvas::new(width, height, Rgba::default()).unwrap();
    let noise = super::rand_bytes((width * height * 4) as usize);
    for (i, px) in noise.chunks_exact(4).enumerate() {
      let (x, y) = (i as u32 % width, i as u32 / width);
      canvas.set_pixel(x as i32, y as i32, Rgba { r: px[0], g: px[1], b: px[2], a: px[3] });
    }
    assert_eq!(canvas.as_bytes(), &noise[..]);

    for level in [0, 9] {
      let bytes = encode_with(&canvas, EncodeOptions { compression_level: level });
      let (w, h, pixels) = decode(&bytes);
      assert_eq!((w, h), (width, height));
      assert_eq!(pixels, canvas.as_bytes(), "{width}x{height} level {level}");
    }
  }
}

#[test]
fn test_exactly_one_idat() {
  let canvas = Canvas::new(300, 200, RED).unwrap();
  let bytes = encode(&canvas);
  let idats = PngRawChunkIter::new(&bytes).filter(|c| c.chunk_type == PngChunkType::IDAT).count();
  assert_eq!(idats, 1);
}

#[test]
fn test_drawn_canvas_round_trip() {
  let mut canvas = Canvas::new(64, 24, Rgba { r: 20, g: 24, b: 28, a: 255 }).unwrap();
  canvas.fill_rect(2, 2, 62, 22, Rgba { r: 0, g: 0, b: 80, a: 255 });
  canvas.stroke_rect(2, 2, 62, 22, Rgba { r: 84, g: 156, b: 255, a: 255 });
  canvas.draw_text(6, 8, "moov 42", Rgba { r: 240, g: 240, b: 240, a: 255 }, 1);
  let (_, _, pixels) = decode(&encode(&canvas));
  assert_eq!(pixels, canvas.as_bytes());
}

#[test]
fn test_diagrams_encode_and_verify() {
  for d in diagrams::ALL {
    let canvas = (d.draw)().unwrap();
    let bytes = encode(&canvas);
    let ihdr = verify_chunks(&bytes).unwrap();
    assert_eq!((ihdr.width, ihdr.height), (canvas.width(), canvas.height()));
    let (_, _, pixels) = decode(&bytes);
    assert_eq!(pixels, canvas.as_bytes(), "{}", d.file_name);
  }
}

#[test]
fn test_encoding_is_deterministic() {
  let canvas = diagrams::chapter_tracks().unwrap();
  assert_eq!(encode(&canvas), encode(&canvas));
}
