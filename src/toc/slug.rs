use super::*;

static NON_WORD_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("BUG: invalid NON_WORD_RE regex literal"));

static SPACE_RUN_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").expect("BUG: invalid SPACE_RUN_RE regex literal"));

static DASH_RUN_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"-+").expect("BUG: invalid DASH_RUN_RE regex literal"));

/// Converts heading text into a TOC anchor.
///
/// Steps: lowercase, trim, drop everything but word characters, whitespace
/// and `-`, turn whitespace runs into `-`, collapse repeated `-`, and trim
/// `-` from both ends. Word characters are Unicode aware, so accented letters
/// and CJK survive while punctuation and emoji go away.
///
/// This is close to GitHub's anchors but not identical: GitHub keeps dash
/// runs (`C++ & Rust` becomes `c--rust` there, `c-rust` here), so headings
/// whose punctuation leaves adjacent dashes link differently.
#[must_use]
pub fn slugify(text: &str) -> String {
  let lower = text.to_lowercase();
  let kept = NON_WORD_RE.replace_all(lower.trim(), "");
  let dashed = SPACE_RUN_RE.replace_all(&kept, "-");
  let collapsed = DASH_RUN_RE.replace_all(&dashed, "-");
  collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Reference anchors. Dash runs are collapsed, unlike GitHub's renderer.
  const GOLDEN: &[(&str, &str)] = &[
    ("Getting Started", "getting-started"),
    ("FAQ", "faq"),
    ("Install", "install"),
    ("What's New?", "whats-new"),
    ("C++ & Rust", "c-rust"),
    ("1. Build from source", "1-build-from-source"),
    ("2024 release notes", "2024-release-notes"),
    ("snake_case_names", "snake_case_names"),
    ("  padded title  ", "padded-title"),
    ("API: read/write", "api-readwrite"),
    ("Émigré café", "émigré-café"),
    ("日本語 ドキュメント", "日本語-ドキュメント"),
    ("Ship it 🚀", "ship-it"),
    ("-- dashes --", "dashes"),
    ("a - b", "a-b"),
    ("fast-start: moov before mdat", "fast-start-moov-before-mdat"),
    ("", ""),
  ];

  #[test]
  fn golden_anchors() {
    for (title, anchor) in GOLDEN {
      assert_eq!(slugify(title), *anchor, "title {title:?}");
    }
  }

  #[test]
  fn valid_slugs_are_fixed_points() {
    for slug in ["getting-started", "a", "snake_case-and-dash", "v2-0-1", "émigré-café"] {
      assert_eq!(slugify(slug), slug);
    }
  }
}
