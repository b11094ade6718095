//! Regenerates the table of contents of a Markdown document.
//!
//! The document carries two marker lines, by default
//!
//! ```text
//! <!-- TOC START (generated by `doctools toc`) -->
//! <!-- TOC END -->
//! ```
//!
//! and everything between them is owned by this module. On every run the
//! region is replaced with a `## Table of Contents` heading followed by one
//! nested list item per `##`..`######` heading in the document:
//!
//! ```text
//! ## Table of Contents
//! - [Getting Started](#getting-started)
//!   - [Install](#install)
//! - [FAQ](#faq)
//! ```
//!
//! Level 1 headings, headings whose text is empty after stripping markup, and
//! the "Table of Contents" heading itself are left out, which also makes the
//! rewrite a fixed point: running it on its own output changes nothing.

use std::{fs, io::ErrorKind, path::Path, sync::LazyLock};

use log::{debug, info, trace, warn};
use regex::Regex;

use crate::{output::write_atomic, DocToolsError, Result};

mod heading;
pub use heading::*;

mod slug;
pub use slug::*;

mod markers;
pub use markers::*;

/// The first line of every generated region.
pub const TOC_HEADING: &str = "## Table of Contents";

/// One line of the generated list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TocEntry {
  pub level: u8,
  pub title: String,
  pub anchor: String,
}
impl TocEntry {
  /// Makes the entry for a heading, or `None` if the heading is left out of
  /// the table.
  #[must_use]
  pub fn from_heading(heading: &Heading) -> Option<Self> {
    let title = clean_title(&heading.title);
    if title.is_empty() {
      warn!("skipping heading with no text: {:?}", heading.title);
      return None;
    }
    if title.eq_ignore_ascii_case("table of contents") {
      return None;
    }
    let anchor = slugify(&title);
    Some(Self { level: heading.level, title, anchor })
  }
}
impl core::fmt::Display for TocEntry {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for _ in 2..self.level {
      f.write_str("  ")?;
    }
    write!(f, "- [{}](#{})", self.title, self.anchor)
  }
}

/// The lines of a fresh TOC region for this document: [`TOC_HEADING`] then
/// one entry per heading.
#[must_use]
pub fn build_toc<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
  let headings = extract_headings(lines);
  let mut out = Vec::with_capacity(headings.len() + 1);
  out.push(TOC_HEADING.to_string());
  out.extend(headings.iter().filter_map(TocEntry::from_heading).map(|e| e.to_string()));
  debug!("{} headings, {} TOC entries", headings.len(), out.len() - 1);
  out
}

/// Rewrites the TOC region of a document using the default markers.
///
/// See [`rewrite_with`].
#[inline]
pub fn rewrite(document: &str) -> Result<String> {
  rewrite_with(document, &TocMarkers::default())
}

/// Rewrites the TOC region of a document.
///
/// The marker lines themselves are kept exactly, everything between them is
/// replaced, and the result always ends with a single newline.
///
/// ## Failure
/// * [`DocToolsError::MissingStartMarker`] or
///   [`DocToolsError::MissingEndMarker`] if the region can't be found.
pub fn rewrite_with(document: &str, markers: &TocMarkers) -> Result<String> {
  let lines: Vec<&str> = document.lines().collect();
  let (start, end) = find_markers(&lines, markers)?;
  let toc = build_toc(lines.iter().copied());

  let mut out = String::with_capacity(document.len() + 64);
  let kept_before = lines[..=start].iter().copied();
  let kept_after = lines[end..].iter().copied();
  for line in kept_before.chain(toc.iter().map(String::as_str)).chain(kept_after) {
    out.push_str(line);
    out.push('\n');
  }
  Ok(out)
}

/// Rewrites the TOC of a file in place.
///
/// Returns `true` if the file changed. A file that's already up to date is
/// not written at all. With `check` set nothing is ever written, and a file
/// that would change gives [`DocToolsError::OutOfDate`] instead.
///
/// The file is only replaced once the new text is complete, so any failure
/// leaves it untouched.
pub fn rewrite_file(path: &Path, markers: &TocMarkers, check: bool) -> Result<bool> {
  let document = match fs::read_to_string(path) {
    Ok(text) => text,
    Err(e) if e.kind() == ErrorKind::NotFound => {
      return Err(DocToolsError::DocumentNotFound(path.to_path_buf()))
    }
    Err(e) => return Err(e.into()),
  };
  let updated = rewrite_with(&document, markers)?;
  if updated == document {
    info!("{} is up to date", path.display());
    return Ok(false);
  }
  if check {
    return Err(DocToolsError::OutOfDate(path.to_path_buf()));
  }
  write_atomic(path, updated.as_bytes())?;
  info!("updated {}", path.display());
  Ok(true)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn entry_indent_follows_level() {
    let e = |level| TocEntry { level, title: "T".into(), anchor: "t".into() }.to_string();
    assert_eq!(e(2), "- [T](#t)");
    assert_eq!(e(3), "  - [T](#t)");
    assert_eq!(e(6), "        - [T](#t)");
  }

  #[test]
  fn toc_heading_is_excluded() {
    for title in ["Table of Contents", "TABLE OF CONTENTS", " table of `contents` "] {
      let h = Heading { level: 2, title: title.into() };
      assert_eq!(TocEntry::from_heading(&h), None, "{title:?}");
    }
  }

  #[test]
  fn entry_uses_cleaned_title() {
    let h = Heading { level: 3, title: "The [`encode`](src/png.rs) step".into() };
    let e = TocEntry::from_heading(&h).unwrap();
    assert_eq!(e.to_string(), "  - [The encode step](#the-encode-step)");
  }

  #[test]
  fn build_toc_skips_level_one() {
    let toc = build_toc(["# Project", "## Usage", "text", "#### Deep"]);
    assert_eq!(toc, [TOC_HEADING, "- [Usage](#usage)", "    - [Deep](#deep)"]);
  }

  #[test]
  fn rewrite_replaces_only_the_region() {
    let doc = "# P\nintro\n<!-- TOC START -->\nstale\n- [Gone](#gone)\n<!-- TOC END -->\n## A\n";
    let out = rewrite(doc).unwrap();
    assert_eq!(
      out,
      "# P\nintro\n<!-- TOC START -->\n## Table of Contents\n- [A](#a)\n<!-- TOC END -->\n## A\n"
    );
  }

  #[test]
  fn rewrite_normalizes_line_endings_and_trailing_newline() {
    let doc = "<!-- TOC START -->\r\n<!-- TOC END -->\r\n## B";
    assert_eq!(rewrite(doc).unwrap(), "<!-- TOC START -->\n## Table of Contents\n- [B](#b)\n<!-- TOC END -->\n## B\n");
  }
}
