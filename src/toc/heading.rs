use super::*;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(#{2,6})\s+(.*)$").expect("BUG: invalid HEADING_RE regex literal")
});

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("BUG: invalid IMAGE_RE regex literal")
});

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("BUG: invalid LINK_RE regex literal")
});

/// A Markdown ATX heading of level 2 through 6.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Heading {
  pub level: u8,
  /// The text after the `#` marks, trimmed but otherwise as written.
  pub title: String,
}
impl Heading {
  /// Parses one line, `None` if it isn't a `##`..`######` heading.
  ///
  /// Level 1 headings and lines with seven or more `#` never match.
  #[must_use]
  pub fn parse(line: &str) -> Option<Self> {
    let caps = HEADING_RE.captures(line)?;
    let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
    let title = caps.get(2)?.as_str().trim().to_string();
    Some(Self { level, title })
  }
}

/// Every heading in the document, in order.
#[must_use]
pub fn extract_headings<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Heading> {
  lines.into_iter().filter_map(Heading::parse).collect()
}

/// Strips inline Markdown from a heading title so it reads as plain text.
///
/// Images are removed entirely, links keep only their text, and backticks
/// are dropped. The result is trimmed.
#[must_use]
pub fn clean_title(title: &str) -> String {
  let no_images = IMAGE_RE.replace_all(title, "");
  let no_links = LINK_RE.replace_all(&no_images, "$1");
  no_links.replace('`', "").trim().to_string()
}
