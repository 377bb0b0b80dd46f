/// Configuration options for the bracket scanner.
///
/// # Default
///
/// All options default to `false`: only brackets are reported, and input
/// may end inside a literal or block comment unreported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    /// Whether to report input that ends inside a string, character literal
    /// or block comment.
    ///
    /// When `true`, one [`DiagnosticKind::Unterminated`] diagnostic pointing
    /// at the opening quote or `/*` is appended after all bracket
    /// diagnostics. A `//` comment running to end of input is not
    /// unterminated.
    ///
    /// # Examples
    ///
    /// ```c
    /// int main() { puts("oops); }
    /// ```
    ///
    /// With the default, the string swallows `); }` and only `(` and `{` are
    /// reported. With this option, the `"` is reported as well.
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`DiagnosticKind::Unterminated`]: crate::DiagnosticKind::Unterminated
    pub report_unterminated: bool,
}

/// How a [`Report`](crate::Report) writes positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionStyle {
    /// One `Line <line>, Position <column>` line per diagnostic.
    #[default]
    LineColumn,
    /// All 0-based character offsets on the header line, separated by
    /// spaces.
    Offset,
}

/// Configuration options for rendering a [`Report`](crate::Report).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportOptions {
    /// Position format.
    ///
    /// # Default
    ///
    /// [`PositionStyle::LineColumn`]
    pub style: PositionStyle,
}
