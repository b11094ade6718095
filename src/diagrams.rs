//! The diagrams shipped in `docs/diagrams/`.
//!
//! Each one is a plain function that paints a fresh [`Canvas`]. Add new
//! diagrams to [`ALL`] so that `doctools diagrams` renders them.

use crate::{Canvas, Result, Rgba};

/// A diagram the CLI knows how to render.
#[derive(Debug, Clone, Copy)]
pub struct Diagram {
  /// Output file name, relative to the diagram directory.
  pub file_name: &'static str,
  pub draw: fn() -> Result<Canvas>,
}

/// Every diagram, in render order.
pub const ALL: &[Diagram] = &[Diagram { file_name: "chapter_tracks.png", draw: chapter_tracks }];

const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
  Rgba { r, g, b, a: 255 }
}

pub const BACKGROUND: Rgba = rgb(20, 24, 28);
const WHITE: Rgba = rgb(240, 240, 240);
const GRAY: Rgba = rgb(180, 180, 180);
const BLUE: Rgba = rgb(84, 156, 255);
const GREEN: Rgba = rgb(120, 200, 120);
const PURPLE: Rgba = rgb(180, 140, 255);
const ORANGE: Rgba = rgb(255, 170, 90);
const BORDER: Rgba = rgb(80, 90, 100);

const LABEL_SCALE: u32 = 2;

/// Layout of a ChapterForge M4A: the top level boxes, and inside `moov` the
/// audio track plus the chapter title, URL, and image tracks.
pub fn chapter_tracks() -> Result<Canvas> {
  let mut img = Canvas::new(1200, 620, BACKGROUND)?;
  let s = LABEL_SCALE;

  img.draw_text(20, 20, "chapterforge m4a structure", WHITE, s);

  // top level boxes
  img.stroke_rect(20, 90, 1000, 550, BORDER);
  img.draw_text(30, 100, "moov", GRAY, s);
  img.stroke_rect(20, 50, 140, 80, BORDER);
  img.draw_text(30, 56, "ftyp", GRAY, s);
  img.stroke_rect(160, 50, 300, 80, BORDER);
  img.draw_text(170, 56, "free", GRAY, s);
  img.stroke_rect(320, 50, 1000, 80, BORDER);
  img.draw_text(330, 56, "mdat (audio + chapters)", GRAY, s);
  img.draw_text(700, 100, "fast-start: moov placed before mdat", GRAY, s);

  let tracks: [(i32, i32, Rgba, &str, Option<&str>); 4] = [
    (140, 220, BLUE, "trak audio (soun)", Some("long single audio track, reused stbl")),
    (240, 310, GREEN, "trak chapter titles (tx3g)", Some("padded samples + href=none")),
    (330, 400, PURPLE, "trak chapter urls (tx3g href)", Some("only if any chapter has url")),
    (420, 500, ORANGE, "trak chapter images (jpeg)", None),
  ];
  for (top, bottom, color, title, note) in tracks {
    img.stroke_rect(60, top, 460, bottom, color);
    img.draw_text(70, top + 12, title, WHITE, s);
    if let Some(note) = note {
      img.draw_text(70, top + 42, note, GRAY, s);
    }
  }

  let notes: [(i32, i32, &str); 7] = [
    (520, 230, "padding: chapter_count + 2 samples"),
    (520, 260, "href: start=0 end=0x000a length+url+pad"),
    (520, 300, "chapters: multiple text/url/image samples"),
    (520, 330, "handlers:"),
    (540, 360, "titles -> \"Chapter Titles\""),
    (540, 390, "urls   -> \"Chapter URLs\""),
    (540, 420, "images -> \"Chapter Images\""),
  ];
  for (x, y, text) in notes {
    img.draw_text(x, y, text, GRAY, s);
  }

  // nesting indicator for the tracks inside moov
  img.stroke_rect(30, 120, 980, 520, BORDER);

  Ok(img)
}
