//! Inline substitutions applied to the text content of blocks.
//!
//! Each rule pairs a pattern with a pure rewrite function. Rules run in the
//! order of [`INLINE_RULES`]; every rule scans the output of the previous one
//! exactly once, replacing all non-overlapping matches from left to right.
//! Directives written with brackets (`[[...]]`, `((...))`) are resolved
//! before the `*`/`_` emphasis markers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A single inline substitution.
pub struct InlineRule {
    /// Short label used in logs and tests.
    pub name: &'static str,
    pattern: LazyLock<Regex>,
    rewrite: fn(&Captures<'_>) -> String,
}

impl InlineRule {
    /// Apply this rule to every non-overlapping match in `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.rewrite).into_owned()
    }
}

/// The inline rules in evaluation order.
pub static INLINE_RULES: [InlineRule; 4] = [
    InlineRule {
        name: "digest",
        pattern: lazy_regex!(r"\[\[(.*?)\]\]", "valid digest directive regex"),
        rewrite: digest,
    },
    InlineRule {
        name: "strip",
        pattern: lazy_regex!(r"\(\((.*?)\)\)", "valid strip directive regex"),
        rewrite: strip_c,
    },
    InlineRule {
        name: "bold",
        pattern: lazy_regex!(r"\*\*(.*?)\*\*", "valid bold regex"),
        rewrite: bold,
    },
    InlineRule {
        name: "emphasis",
        pattern: lazy_regex!(r"__(.*?)__", "valid emphasis regex"),
        rewrite: emphasis,
    },
];

fn digest(caps: &Captures<'_>) -> String {
    format!("{:x}", md5::compute(caps[1].as_bytes()))
}

fn strip_c(caps: &Captures<'_>) -> String {
    caps[1].chars().filter(|c| !matches!(c, 'c' | 'C')).collect()
}

fn bold(caps: &Captures<'_>) -> String {
    format!("<b>{}</b>", &caps[1])
}

fn emphasis(caps: &Captures<'_>) -> String {
    format!("<em>{}</em>", &caps[1])
}

/// Run every rule in [`INLINE_RULES`] over `text`.
///
/// # Examples
///
/// ```
/// use md2html::transform;
///
/// assert_eq!(transform("**x** and __y__"), "<b>x</b> and <em>y</em>");
/// assert_eq!(transform("((Cocoa))"), "ooa");
/// ```
#[must_use]
pub fn transform(text: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
