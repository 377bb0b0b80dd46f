use core::fmt;

use crate::{Bracket, Position};

/// Literal or comment that can still be open when the input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construct {
    /// `"..."`
    String,
    /// `'...'`
    Char,
    /// `/* ... */`
    BlockComment,
}

/// Why a position was reported.
///
/// The rendered report does not distinguish kinds; they are kept for callers
/// that want more than a list of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// A closing bracket with no open bracket of the same family on top of
    /// the stack.
    UnexpectedClose(Bracket),
    /// An opening bracket still on the stack at end of input.
    Unclosed(Bracket),
    /// Input ended inside a literal or block comment. Only produced when
    /// [`ScanOptions::report_unterminated`](crate::ScanOptions) is set.
    Unterminated(Construct),
}

/// A reported unmatched bracket (or unterminated construct) and where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Where: the offending closing bracket, the unclosed opening bracket, or
    /// the start of the unterminated construct.
    pub position: Position,
}

impl Diagnostic {
    pub(crate) const fn new(kind: DiagnosticKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, Position {}",
            self.position.line, self.position.column
        )
    }
}
