use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{arbitrary::NoisyLines, quickcheck_tests};
use crate::{Diagnostic, DiagnosticKind, scan, scan_str};

fn char_at(lines: &[String], diagnostic: &Diagnostic) -> Option<char> {
    let position = diagnostic.position;
    lines
        .get(position.line.checked_sub(1)?)?
        .chars()
        .nth(position.column.checked_sub(1)?)
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn scanning_is_repeatable_and_split_invariant(lines: NoisyLines) -> bool {
    let first = scan(&lines.0);
    first == scan(&lines.0) && first == scan_str(&lines.0.join("\n"))
}

/// Property: every bracket diagnostic points at a bracket of the reported
/// family, by line/column and by offset.
#[test]
fn diagnostics_point_at_their_brackets() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(lines: NoisyLines) -> bool {
        let text: Vec<char> = lines.0.join("\n").chars().collect();
        scan(&lines.0).iter().all(|diagnostic| {
            let expected = match diagnostic.kind {
                DiagnosticKind::UnexpectedClose(bracket) => bracket.close_char(),
                DiagnosticKind::Unclosed(bracket) => bracket.open_char(),
                DiagnosticKind::Unterminated(_) => return false,
            };
            char_at(&lines.0, diagnostic) == Some(expected)
                && text.get(diagnostic.position.offset) == Some(&expected)
        })
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(NoisyLines) -> bool);
}

/// Property: closing bracket diagnostics come first in scan order, then
/// unclosed brackets from the most recently opened.
#[test]
fn diagnostics_follow_output_order() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(lines: NoisyLines) -> bool {
        let diagnostics = scan(&lines.0);
        let split = diagnostics
            .iter()
            .position(|d| matches!(d.kind, DiagnosticKind::Unclosed(_)))
            .unwrap_or(diagnostics.len());
        let (closers, openers) = diagnostics.split_at(split);

        closers
            .iter()
            .all(|d| matches!(d.kind, DiagnosticKind::UnexpectedClose(_)))
            && openers
                .iter()
                .all(|d| matches!(d.kind, DiagnosticKind::Unclosed(_)))
            && closers
                .windows(2)
                .all(|w| w[0].position.offset < w[1].position.offset)
            && openers
                .windows(2)
                .all(|w| w[0].position.offset > w[1].position.offset)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(NoisyLines) -> bool);
}
