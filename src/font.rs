//! The fixed 3x5 bitmap font used for diagram labels.
//!
//! Each glyph is five rows of three cells, top to bottom. A `'1'` cell is
//! drawn, anything else is left alone. Only uppercase letters, digits, and a
//! few punctuation marks exist; callers fold to uppercase before lookup.

/// Columns in every glyph.
pub const GLYPH_WIDTH: u32 = 3;

/// Rows in every glyph.
pub const GLYPH_HEIGHT: u32 = 5;

/// Horizontal cursor advance per character at scale 1: the glyph plus one
/// column of spacing.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// One glyph: [`GLYPH_HEIGHT`] rows of [`GLYPH_WIDTH`] cells each.
pub type Glyph = [&'static str; GLYPH_HEIGHT as usize];

/// Every glyph the font knows about.
pub const GLYPHS: &[(char, Glyph)] = &[
  ('A', [" 1 ", "1 1", "111", "1 1", "1 1"]),
  ('B', ["11 ", "1 1", "11 ", "1 1", "11 "]),
  ('C', [" 11", "1  ", "1  ", "1  ", " 11"]),
  ('D', ["11 ", "1 1", "1 1", "1 1", "11 "]),
  ('E', ["111", "1  ", "11 ", "1  ", "111"]),
  ('F', ["111", "1  ", "11 ", "1  ", "1  "]),
  ('G', [" 11", "1  ", "1  ", "1 1", " 11"]),
  ('H', ["1 1", "1 1", "111", "1 1", "1 1"]),
  ('I', ["111", " 1 ", " 1 ", " 1 ", "111"]),
  ('J', [" 11", "  1", "  1", "1 1", " 1 "]),
  ('K', ["1 1", "1 1", "11 ", "1 1", "1 1"]),
  ('L', ["1  ", "1  ", "1  ", "1  ", "111"]),
  ('M', ["1 1", "111", "1 1", "1 1", "1 1"]),
  ('N', ["1 1", "111", "111", "111", "1 1"]),
  ('O', ["111", "1 1", "1 1", "1 1", "111"]),
  ('P', ["111", "1 1", "111", "1  ", "1  "]),
  ('Q', ["111", "1 1", "1 1", "111", "  1"]),
  ('R', ["111", "1 1", "111", "11 ", "1 1"]),
  ('S', [" 11", "1  ", "111", "  1", "11 "]),
  ('T', ["111", " 1 ", " 1 ", " 1 ", " 1 "]),
  ('U', ["1 1", "1 1", "1 1", "1 1", "111"]),
  ('V', ["1 1", "1 1", "1 1", "1 1", " 1 "]),
  ('W', ["1 1", "1 1", "1 1", "111", "1 1"]),
  ('X', ["1 1", "1 1", " 1 ", "1 1", "1 1"]),
  ('Y', ["1 1", "1 1", " 1 ", " 1 ", " 1 "]),
  ('Z', ["111", "  1", " 1 ", "1  ", "111"]),
  ('0', ["111", "1 1", "1 1", "1 1", "111"]),
  ('1', [" 1 ", "11 ", " 1 ", " 1 ", "111"]),
  ('2', ["111", "  1", "111", "1  ", "111"]),
  ('3', ["111", "  1", "111", "  1", "111"]),
  ('4', ["1 1", "1 1", "111", "  1", "  1"]),
  ('5', ["111", "1  ", "111", "  1", "111"]),
  ('6', ["111", "1  ", "111", "1 1", "111"]),
  ('7', ["111", "  1", "  1", "  1", "  1"]),
  ('8', ["111", "1 1", "111", "1 1", "111"]),
  ('9', ["111", "1 1", "111", "  1", "111"]),
  ('-', ["   ", "   ", "111", "   ", "   "]),
  ('.', ["   ", "   ", "   ", "   ", " 1 "]),
  ('/', ["  1", "  1", " 1 ", "1  ", "1  "]),
  (':', [" 1 ", "   ", "   ", "   ", " 1 "]),
  ('(', ["  1", " 1 ", " 1 ", " 1 ", "  1"]),
  (')', ["1  ", " 1 ", " 1 ", " 1 ", "1  "]),
  (' ', ["   ", "   ", "   ", "   ", "   "]),
];

/// Looks up the glyph for a character, exactly as given (no case folding).
#[inline]
#[must_use]
pub fn glyph(c: char) -> Option<&'static Glyph> {
  GLYPHS.iter().find(|(k, _)| *k == c).map(|(_, g)| g)
}

/// Iterates the `(column, row)` position of every "on" cell in a glyph.
#[inline]
pub fn lit_cells(glyph: &Glyph) -> impl Iterator<Item = (u32, u32)> + '_ {
  glyph.iter().enumerate().flat_map(|(gy, row)| {
    row.bytes().enumerate().filter(|&(_, c)| c == b'1').map(move |(gx, _)| (gx as u32, gy as u32))
  })
}
