//! Scanner: one forward pass over the input lines.
//!
//! Each character first updates the [`LexMode`]; only characters read in
//! [`LexMode::Code`] take part in bracket matching. Opening brackets are
//! pushed with their position. A closing bracket pops the stack when the top
//! is the same family and is reported otherwise, leaving the stack as it was.
//! [`Scanner::finish`] reports whatever is still open, innermost first.
//!
//! Invariants
//! - Reported closing brackets appear in scan order, before any unclosed
//!   opening bracket.
//! - Unclosed opening brackets appear in reverse order of opening.
//! - A line comment never survives the end of its line; a block comment,
//!   string or char literal does.
//! - Lookahead never crosses a line boundary.

mod mode;


use alloc::vec::Vec;
use core::mem;

pub use mode::LexMode;
use tracing::{debug, trace};

use crate::{Bracket, BracketToken, Diagnostic, DiagnosticKind, Position, ScanOptions};

/// Owns the state of one scan: the bracket stack, the lexical mode and the
/// diagnostics found so far.
///
/// Feed lines in order with [`feed_line`](Self::feed_line), then call
/// [`finish`](Self::finish), which consumes the scanner. A scanner is never
/// reused, so repeated scans of the same input give the same result.
///
/// ```rust
/// use bracketcheck::{Scanner, ScanOptions};
///
/// let mut scanner = Scanner::new(ScanOptions::default());
/// scanner.feed_line("/* (");
/// scanner.feed_line("*/ f(x);");
/// assert!(scanner.finish().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
    mode: LexMode,
    /// Where the current string, char literal or comment began.
    mode_start: Option<Position>,
    stack: Vec<BracketToken>,
    diagnostics: Vec<Diagnostic>,
    /// Lines fed so far; also the 1-based number of the current line.
    line: usize,
    /// Characters fed so far, counting one per line terminator.
    offset: usize,
    chars: Vec<char>,
}

impl Scanner {
    /// Creates a scanner positioned before the first line.
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Scans one line. `line` must not contain its terminator; a `\n` is
    /// assumed after it.
    pub fn feed_line(&mut self, line: &str) {
        self.line += 1;

        let mut chars = mem::take(&mut self.chars);
        chars.clear();
        chars.extend(line.chars());

        let mut cursor = 0;
        while cursor < chars.len() {
            let ch = chars[cursor];
            let position = Position::new(self.line, cursor + 1, self.offset + cursor);
            let step = self.mode.step(ch, chars.get(cursor + 1).copied());

            if step.mode != self.mode {
                self.mode_start = (!step.mode.is_code()).then_some(position);
                self.mode = step.mode;
            }
            cursor += step.consumed;

            if step.consumed == 1 && self.mode.is_code() {
                self.classify(ch, position);
            }
        }

        self.offset += chars.len() + 1;
        self.chars = chars;

        let mode = self.mode.end_of_line();
        if mode != self.mode {
            self.mode = mode;
            self.mode_start = None;
        }
    }

    fn classify(&mut self, ch: char, position: Position) {
        if let Some(bracket) = Bracket::from_open(ch) {
            self.stack.push(BracketToken { bracket, position });
        } else if let Some(bracket) = Bracket::from_close(ch) {
            if self.stack.last().is_some_and(|top| top.bracket == bracket) {
                self.stack.pop();
            } else {
                trace!(%position, ?bracket, "unexpected closing bracket");
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnexpectedClose(bracket),
                    position,
                ));
            }
        }
    }

    /// Current lexical mode.
    #[must_use]
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Opening brackets not yet matched, outermost first.
    #[must_use]
    pub fn open_brackets(&self) -> &[BracketToken] {
        &self.stack
    }

    /// Finishes the scan and returns every diagnostic.
    ///
    /// Brackets still open are appended innermost first, after the closing
    /// bracket diagnostics collected while scanning. With
    /// [`ScanOptions::report_unterminated`], input ending inside a string,
    /// char literal or block comment adds one more diagnostic at its start.
    #[must_use]
    pub fn finish(self) -> Vec<Diagnostic> {
        let Self {
            options,
            mode,
            mode_start,
            stack,
            mut diagnostics,
            line,
            ..
        } = self;

        let unexpected = diagnostics.len();
        diagnostics.extend(
            stack
                .into_iter()
                .rev()
                .map(|open| {
                    Diagnostic::new(DiagnosticKind::Unclosed(open.bracket), open.position)
                }),
        );

        if let Some(construct) = mode.unterminated() {
            trace!(
                ?construct,
                report = options.report_unterminated,
                "input ended inside construct"
            );
            if let Some(start) = mode_start.filter(|_| options.report_unterminated) {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::Unterminated(construct),
                    start,
                ));
            }
        }

        debug!(
            lines = line,
            unexpected,
            total = diagnostics.len(),
            "scan finished"
        );
        diagnostics
    }
}

/// Scans `lines` with default options.
///
/// Each item is one line without its terminator. Never fails; an empty result
/// means every bracket is matched.
#[must_use]
pub fn scan<I>(lines: I) -> Vec<Diagnostic>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    scan_with(lines, ScanOptions::default())
}

/// Scans `lines` with `options`.
#[must_use]
pub fn scan_with<I>(lines: I, options: ScanOptions) -> Vec<Diagnostic>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scanner = Scanner::new(options);
    for line in lines {
        scanner.feed_line(line.as_ref());
    }
    scanner.finish()
}

/// Splits `text` on `\n` and scans the pieces with default options.
///
/// A `\r` before the `\n` stays part of the line, as any other character.
#[must_use]
pub fn scan_str(text: &str) -> Vec<Diagnostic> {
    scan(text.split('\n'))
}
