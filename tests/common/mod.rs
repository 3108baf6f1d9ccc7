//! Utility helpers shared across integration tests.

use std::path::{Path, PathBuf};

/// Build a `Vec<String>` from a list of string slices.
///
/// Used to reduce boilerplate when constructing source documents.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Write `content` to `name` inside `dir` and return the full path.
#[expect(dead_code, reason = "only the CLI tests write source files")]
pub fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write source file");
    path
}

/// Assert that every opening block tag in `html` has a matching close.
#[expect(dead_code, reason = "only the rendering tests check tag balance")]
pub fn assert_balanced(html: &[String]) {
    for (open, close) in [("<ul>", "</ul>"), ("<ol>", "</ol>"), ("<p>", "</p>")] {
        let opens = html.iter().filter(|l| l.as_str() == open).count();
        let closes = html.iter().filter(|l| l.as_str() == close).count();
        assert_eq!(opens, closes, "unbalanced {open} in {html:?}");
    }
}
