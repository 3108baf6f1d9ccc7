//! Line-oriented block parser.
//!
//! Lines are classified one at a time with no lookahead. The parser keeps
//! which block is currently open (unordered list, ordered list or
//! paragraph) and emits structural tags as runs of lines start and end.
//! Text content is passed through [`transform`] before it is emitted.

use tracing::trace;

use crate::inline::transform;

/// Marker appended to every paragraph line.
pub const LINE_BREAK: &str = "<br/>";

const ITEM_INDENT: &str = "    ";

/// Classification of a single trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#` run of length `level` followed by the heading text.
    Heading { level: usize, text: &'a str },
    /// `- ` item text.
    UnorderedItem(&'a str),
    /// `* ` item text.
    OrderedItem(&'a str),
    /// Empty or whitespace-only line.
    Blank,
    /// Paragraph text.
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

/// Classify a line.
///
/// Surrounding whitespace is ignored. Any line starting with `#` is a
/// heading whose level is the length of the leading `#` run; the level is
/// not capped and no space is required after the marker.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        let rest = trimmed.trim_start_matches('#');
        let level = trimmed.len() - rest.len();
        return LineKind::Heading {
            level,
            text: rest.trim(),
        };
    }
    if let Some(rest) = trimmed.strip_prefix("- ") {
        return LineKind::UnorderedItem(rest.trim());
    }
    if let Some(rest) = trimmed.strip_prefix("* ") {
        return LineKind::OrderedItem(rest.trim());
    }
    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(trimmed)
    }
}

/// Parser state threaded through each line.
///
/// At most one list is open at a time, and a paragraph is never open
/// alongside a list.
#[derive(Debug, Default)]
pub struct BlockParser {
    list: Option<ListKind>,
    in_paragraph: bool,
    out: Vec<String>,
}

impl BlockParser {
    /// Create a parser with no open blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one source line to the parser.
    ///
    /// Opens or closes blocks as needed and appends the line's HTML.
    pub fn push_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::Heading { level, text } => {
                self.close_list();
                self.close_paragraph();
                self.out
                    .push(format!("<h{level}>{}</h{level}>", transform(text)));
            }
            LineKind::UnorderedItem(text) => self.push_item(ListKind::Unordered, text),
            LineKind::OrderedItem(text) => self.push_item(ListKind::Ordered, text),
            LineKind::Blank => {
                self.close_list();
                self.close_paragraph();
            }
            LineKind::Text(text) => {
                self.close_list();
                if !self.in_paragraph {
                    trace!("open paragraph");
                    self.out.push("<p>".to_string());
                    self.in_paragraph = true;
                }
                self.out
                    .push(format!("{ITEM_INDENT}{}{LINE_BREAK}", transform(text)));
            }
        }
    }

    /// Close any open block and return the emitted lines.
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        self.close_list();
        self.close_paragraph();
        self.out
    }

    fn push_item(&mut self, kind: ListKind, text: &str) {
        self.close_paragraph();
        if self.list != Some(kind) {
            self.close_list();
            trace!(?kind, "open list");
            self.out.push(kind.open_tag().to_string());
            self.list = Some(kind);
        }
        self.out
            .push(format!("{ITEM_INDENT}<li>{}</li>", transform(text)));
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.list.take() {
            trace!(?kind, "close list");
            self.out.push(kind.close_tag().to_string());
        }
    }

    /// The final paragraph line loses its break marker before `</p>`.
    fn close_paragraph(&mut self) {
        if !self.in_paragraph {
            return;
        }
        trace!("close paragraph");
        if let Some(last) = self.out.last_mut()
            && let Some(len) = last.strip_suffix(LINE_BREAK).map(str::len)
        {
            last.truncate(len);
        }
        self.out.push("</p>".to_string());
        self.in_paragraph = false;
    }
}

/// Render Markdown lines into HTML lines.
///
/// # Examples
///
/// ```
/// use md2html::render;
///
/// let lines = vec!["# Title".to_string(), "- one".to_string(), "- two".to_string()];
/// assert_eq!(
///     render(&lines),
///     vec!["<h1>Title</h1>", "<ul>", "    <li>one</li>", "    <li>two</li>", "</ul>"]
/// );
/// ```
#[must_use]
pub fn render(lines: &[String]) -> Vec<String> {
    let mut parser = BlockParser::new();
    for line in lines {
        parser.push_line(line);
    }
    parser.finish()
}

/// Convert a whole Markdown document into an HTML fragment.
///
/// Lines are joined with `\n`; no trailing newline is added.
#[must_use]
pub fn markdown_to_html(source: &str) -> String {
    let lines: Vec<String> = source.lines().map(str::to_string).collect();
    render(&lines).join("\n")
}
