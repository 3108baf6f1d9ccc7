//! Helper utilities for tests.

/// Collect a list of string literals (or anything that can become a `String`)
/// into a `Vec<String>`.
///
/// ```
/// let lines = md2html::string_vec!["# Title", "- item"];
/// assert_eq!(md2html::render(&lines)[0], "<h1>Title</h1>");
/// ```
#[macro_export]
macro_rules! string_vec {
    ( $($elem:expr),* $(,)? ) => {
        vec![ $( ::std::string::ToString::to_string(&$elem) ),* ]
    };
}
