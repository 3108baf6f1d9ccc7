//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// The expansion is a `const`-compatible [`LazyLock`], so it can initialise
/// fields of `static` items such as the inline rule table.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RE: LazyLock<Regex> = md2html::lazy_regex!(r"\[\[(.*?)\]\]", "digest directive");
/// assert!(RE.is_match("[[payload]]"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
