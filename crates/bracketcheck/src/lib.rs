//! Single-pass checker for unmatched `()`, `[]` and `{}` in C-like source.
//!
//! Brackets inside double-quoted strings, single-quoted character literals,
//! `//` line comments and `/* */` block comments are ignored. Everything else
//! is matched against a stack; closing brackets that do not fit, and opening
//! brackets still open at end of input, are reported as [`Diagnostic`]s.
//!
//! ```rust
//! use bracketcheck::{Position, scan};
//!
//! let diagnostics = scan(["(]"]);
//! let positions: Vec<Position> = diagnostics.iter().map(|d| d.position).collect();
//! assert_eq!(
//!     positions,
//!     [Position::new(1, 2, 1), Position::new(1, 1, 0)],
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod bracket;
mod diagnostic;
mod options;
mod position;
mod report;
mod scanner;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
pub mod io;

#[cfg(test)]
mod tests;

pub use bracket::{Bracket, BracketToken};
pub use diagnostic::{Construct, Diagnostic, DiagnosticKind};
#[cfg(feature = "std")]
pub use error::Error;
pub use options::{PositionStyle, ReportOptions, ScanOptions};
pub use position::Position;
pub use report::Report;
pub use scanner::{LexMode, Scanner, scan, scan_str, scan_with};
