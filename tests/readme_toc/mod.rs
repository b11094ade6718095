use std::fs;

use doctools::{
  toc::{rewrite, rewrite_file, TocMarkers},
  DocToolsError,
};

const START: &str = "<!-- TOC START (run `doctools toc` to update) -->";
const END: &str = "<!-- TOC END -->";

fn sample_readme() -> String {
  [
    "# ChapterForge",
    "",
    "Chapter tooling for M4A audiobooks.",
    "",
    START,
    END,
    "",
    "## Getting Started",
    "",
    "### Install",
    "",
    "## FAQ",
  ]
  .join("\n")
}

#[test]
fn test_getting_started_scenario() {
  let out = rewrite(&sample_readme()).unwrap();
  let expected = [
    "# ChapterForge",
    "",
    "Chapter tooling for M4A audiobooks.",
    "",
    START,
    "## Table of Contents",
    "- [Getting Started](#getting-started)",
    "  - [Install](#install)",
    "- [FAQ](#faq)",
    END,
    "",
    "## Getting Started",
    "",
    "### Install",
    "",
    "## FAQ",
    "",
  ]
  .join("\n");
  assert_eq!(out, expected);
}

#[test]
fn test_rewrite_is_a_fixed_point() {
  let once = rewrite(&sample_readme()).unwrap();
  let twice = rewrite(&once).unwrap();
  assert_eq!(once, twice);

  let fancy = format!(
    "{START}\n{END}\n## Use `doctools`\n### [Docs](https://example.com) & more\n## ![img](a.png)\n## Table of Contents\n"
  );
  let once = rewrite(&fancy).unwrap();
  assert!(once.contains("- [Use doctools](#use-doctools)\n  - [Docs & more](#docs-more)\n"));
  assert_eq!(rewrite(&once).unwrap(), once);
}

#[test]
fn test_missing_end_marker_leaves_file_untouched() {
  super::init_logging();
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("README.md");
  let original = format!("# T\n{START}\n## A\n");
  fs::write(&path, &original).unwrap();

  let err = rewrite_file(&path, &TocMarkers::default(), false).unwrap_err();
  assert!(matches!(err, DocToolsError::MissingEndMarker));
  assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_missing_document() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("README.md");
  let err = rewrite_file(&path, &TocMarkers::default(), false).unwrap_err();
  assert!(matches!(err, DocToolsError::DocumentNotFound(p) if p == path));
  assert!(!path.exists());
}

#[test]
fn test_rewrite_file_updates_then_reports_clean() {
  super::init_logging();
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("README.md");
  fs::write(&path, sample_readme()).unwrap();
  let markers = TocMarkers::default();

  // stale file: check mode refuses and writes nothing
  let err = rewrite_file(&path, &markers, true).unwrap_err();
  assert!(matches!(err, DocToolsError::OutOfDate(_)));
  assert_eq!(fs::read_to_string(&path).unwrap(), sample_readme());

  assert!(rewrite_file(&path, &markers, false).unwrap());
  let updated = fs::read_to_string(&path).unwrap();
  assert!(updated.contains("  - [Install](#install)\n"));

  assert!(!rewrite_file(&path, &markers, false).unwrap());
  assert!(!rewrite_file(&path, &markers, true).unwrap());
  assert_eq!(fs::read_to_string(&path).unwrap(), updated);
}
