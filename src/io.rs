//! File helpers for converting Markdown documents.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::block::render;

/// Errors raised while converting a file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Missing {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read `path` into lines.
///
/// Both `\n` and `\r\n` endings are accepted.
///
/// # Errors
/// Returns [`ConvertError::Missing`] if `path` is not a file and
/// [`ConvertError::Read`] if it cannot be read as UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::Missing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read source");
    Ok(lines)
}

/// Write rendered HTML lines to `path`, joined by `\n`.
///
/// # Errors
/// Returns [`ConvertError::Write`] if the file cannot be written.
pub fn write_html(path: &Path, html: &[String]) -> Result<(), ConvertError> {
    let text = html.join("\n");
    fs::write(path, &text).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote html");
    Ok(())
}

/// Convert the Markdown file at `input` and write the HTML to `output`.
///
/// Nothing is written unless the input was read successfully.
///
/// # Errors
/// Returns an error if reading `input` or writing `output` fails.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let lines = read_lines(input)?;
    write_html(output, &render(&lines))
}
