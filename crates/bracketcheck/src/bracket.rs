use crate::Position;

/// One of the three bracket families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bracket {
    /// `(` and `)`
    Paren,
    /// `[` and `]`
    Square,
    /// `{` and `}`
    Curly,
}

impl Bracket {
    /// Returns the family of `ch` if it is an opening bracket.
    #[must_use]
    pub const fn from_open(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    /// Returns the family of `ch` if it is a closing bracket.
    #[must_use]
    pub const fn from_close(ch: char) -> Option<Self> {
        match ch {
            ')' => Some(Self::Paren),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            _ => None,
        }
    }

    /// The opening character of this family.
    #[must_use]
    pub const fn open_char(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// The closing character of this family.
    #[must_use]
    pub const fn close_char(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// An opening bracket waiting on the scanner's stack for its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketToken {
    /// Family of the opening bracket.
    pub bracket: Bracket,
    /// Where the opening bracket was read.
    pub position: Position,
}
