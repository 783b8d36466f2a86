//! Source text and positions within it.

use std::fmt;
use std::path::{Path, PathBuf};

/// A line/column position in a source text.
///
/// ## Notes
/// - Both fields are 1-based. Columns count characters, so a tab advances the column by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const START: Location = Location { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One input file: its logical path and its full text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of `location` in the text, clamped to the text length.
    ///
    /// Locations past the end of a line resolve to that line's terminator.
    pub fn offset_of(&self, location: Location) -> usize {
        let mut offset = 0;
        for (index, line) in self.text.split_inclusive('\n').enumerate() {
            if index + 1 == location.line as usize {
                let column = location.column.saturating_sub(1) as usize;
                let within = line
                    .char_indices()
                    .nth(column)
                    .map(|(i, _)| i)
                    .unwrap_or(line.len());
                return offset + within;
            }
            offset += line.len();
        }
        self.text.len()
    }
}
