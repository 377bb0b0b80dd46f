use core::fmt;

use crate::{Diagnostic, PositionStyle, ReportOptions};

/// Human-readable summary of a scan.
///
/// Renders through [`Display`](fmt::Display) without a trailing newline.
///
/// ```rust
/// use bracketcheck::{Report, ReportOptions, scan};
///
/// let diagnostics = scan(["f(];"]);
/// let report = Report::new(&diagnostics, ReportOptions::default());
/// assert_eq!(
///     report.to_string(),
///     "Unmatched brackets at positions:\nLine 1, Position 3\nLine 1, Position 2",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    diagnostics: &'a [Diagnostic],
    options: ReportOptions,
}

impl<'a> Report<'a> {
    /// Wraps diagnostics for rendering. Order is kept as given.
    #[must_use]
    pub const fn new(diagnostics: &'a [Diagnostic], options: ReportOptions) -> Self {
        Self {
            diagnostics,
            options,
        }
    }

    /// Whether the scan found nothing to report.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("All brackets are correctly closed.");
        }

        f.write_str("Unmatched brackets at positions:")?;
        match self.options.style {
            PositionStyle::LineColumn => {
                for diagnostic in self.diagnostics {
                    write!(f, "\n{diagnostic}")?;
                }
            }
            PositionStyle::Offset => {
                for diagnostic in self.diagnostics {
                    write!(f, " {}", diagnostic.position.offset)?;
                }
            }
        }
        Ok(())
    }
}
