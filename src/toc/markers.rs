use super::*;

/// The pair of patterns that delimit the generated region.
///
/// A line "matches" when the pattern is found anywhere in it.
#[derive(Debug, Clone)]
pub struct TocMarkers {
  pub start: Regex,
  pub end: Regex,
}
impl TocMarkers {
  pub const DEFAULT_START: &'static str = r"<!-- TOC START";
  pub const DEFAULT_END: &'static str = r"TOC END -->";

  /// Builds markers from custom patterns.
  pub fn new(start: &str, end: &str) -> Result<Self> {
    Ok(Self { start: Regex::new(start)?, end: Regex::new(end)? })
  }
}
impl Default for TocMarkers {
  #[inline]
  fn default() -> Self {
    Self {
      start: Regex::new(Self::DEFAULT_START).expect("BUG: invalid TOC start marker literal"),
      end: Regex::new(Self::DEFAULT_END).expect("BUG: invalid TOC end marker literal"),
    }
  }
}

/// Progress of a marker scan over the document lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerScan {
  SeekingStart,
  SeekingEnd { start: usize },
  Done { start: usize, end: usize },
}
impl MarkerScan {
  /// Feeds the next line (and its index) to the scan.
  ///
  /// A line that opens the region is never also taken as its end. Once
  /// `Done`, further lines change nothing.
  #[must_use]
  pub fn step(self, markers: &TocMarkers, index: usize, line: &str) -> Self {
    match self {
      Self::SeekingStart if markers.start.is_match(line) => Self::SeekingEnd { start: index },
      Self::SeekingEnd { start } if markers.end.is_match(line) => Self::Done { start, end: index },
      other => other,
    }
  }
}

/// Finds the line index of the start marker and of the first end marker
/// after it.
///
/// Only one region is supported: the scan stops at the first complete pair.
pub fn find_markers<S: AsRef<str>>(lines: &[S], markers: &TocMarkers) -> Result<(usize, usize)> {
  let mut scan = MarkerScan::SeekingStart;
  for (i, line) in lines.iter().enumerate() {
    scan = scan.step(markers, i, line.as_ref());
    if let MarkerScan::Done { start, end } = scan {
      trace!("TOC markers at lines {} and {}", start + 1, end + 1);
      return Ok((start, end));
    }
  }
  match scan {
    MarkerScan::SeekingStart => Err(DocToolsError::MissingStartMarker),
    _ => Err(DocToolsError::MissingEndMarker),
  }
}
