use core::fmt;

/// Location of a single character in the scanned input.
///
/// `line` and `column` are 1-based. `offset` is the 0-based character index
/// from the start of the input, where every line break between two lines
/// counts as one character. Columns and offsets count `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column within the line.
    pub column: usize,
    /// 0-based character offset from the start of the input.
    pub offset: usize,
}

impl Position {
    /// Creates a position from its three coordinates.
    #[must_use]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
