use crate::Construct;

/// Lexical context of the character under the cursor.
///
/// Exactly one mode is active at a time. Brackets only count in
/// [`LexMode::Code`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexMode {
    /// Outside any literal or comment.
    #[default]
    Code,
    /// Between double quotes.
    String,
    /// Between single quotes.
    Char,
    /// After `//`, until the end of the line.
    LineComment,
    /// Between `/*` and `*/`, possibly across lines.
    BlockComment,
}

/// Result of feeding one character to [`LexMode::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub mode: LexMode,
    /// Characters consumed: 2 for the `*/` that closes a block comment, 1
    /// otherwise.
    pub consumed: usize,
}

impl LexMode {
    /// Applies the transition rules for `ch`, with `next` the following
    /// character on the same line.
    ///
    /// Quotes are checked before comment starters, and every rule only looks
    /// at the mode before `ch`. Escapes are not modelled: `"\""` closes the
    /// string at the second quote.
    pub(crate) const fn step(self, ch: char, next: Option<char>) -> Step {
        let (mode, consumed) = match (self, ch, next) {
            (Self::Code, '"', _) => (Self::String, 1),
            (Self::String, '"', _) | (Self::Char, '\'', _) => (Self::Code, 1),
            (Self::Code, '\'', _) => (Self::Char, 1),
            (Self::Code, '/', Some('/')) => (Self::LineComment, 1),
            (Self::Code, '/', Some('*')) => (Self::BlockComment, 1),
            // Skip the `/` as well so it cannot start a new comment.
            (Self::BlockComment, '*', Some('/')) => (Self::Code, 2),
            (mode, _, _) => (mode, 1),
        };
        Step { mode, consumed }
    }

    /// Mode after the implicit line terminator.
    pub(crate) const fn end_of_line(self) -> Self {
        match self {
            Self::LineComment => Self::Code,
            mode => mode,
        }
    }

    /// The construct this mode is inside of, if ending the input here leaves
    /// it unterminated.
    pub(crate) const fn unterminated(self) -> Option<Construct> {
        match self {
            Self::String => Some(Construct::String),
            Self::Char => Some(Construct::Char),
            Self::BlockComment => Some(Construct::BlockComment),
            Self::Code | Self::LineComment => None,
        }
    }

    /// Whether brackets are counted in this mode.
    #[must_use]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Code)
    }
}
