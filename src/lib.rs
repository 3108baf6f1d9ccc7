//! Library for converting a small Markdown subset into HTML.
//!
//! The [`block`] module walks the document line by line and decides where
//! paragraphs and lists begin and end. The [`inline`] module rewrites the
//! text inside those blocks. [`io`] wraps both for whole files.

#[macro_use]
mod macros;
#[macro_use]
mod test_utils;

pub mod block;
pub mod inline;
pub mod io;

pub use block::{BlockParser, LINE_BREAK, LineKind, classify, markdown_to_html, render};
pub use inline::{INLINE_RULES, InlineRule, transform};
pub use io::{ConvertError, convert_file, read_lines, write_html};
