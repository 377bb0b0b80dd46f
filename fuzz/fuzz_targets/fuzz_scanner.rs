#![no_main]

use arbitrary::Arbitrary;
use bracketcheck::{DiagnosticKind, ScanOptions, scan, scan_str, scan_with};
use libfuzzer_sys::fuzz_target;

/// Characters that drive the scanner's state machine. Inputs built from this
/// table hit bracket and mode transitions far more often than raw bytes.
static ALPHABET: &[char] = &[
    '(', ')', '[', ']', '{', '}', '"', '\'', '/', '*', ' ', '\n', 'a', 'é',
];

#[derive(Debug, Arbitrary)]
enum Input {
    /// Arbitrary text, split on `\n`.
    Text(String),
    /// Indices into `ALPHABET`.
    Tokens(Vec<u8>),
}

impl Input {
    fn into_text(self) -> String {
        match self {
            Input::Text(text) => text,
            Input::Tokens(tokens) => tokens
                .into_iter()
                .map(|t| ALPHABET[usize::from(t) % ALPHABET.len()])
                .collect(),
        }
    }
}

fn check(text: &str) {
    let lines: Vec<&str> = text.split('\n').collect();
    let chars: Vec<char> = text.chars().collect();

    let diagnostics = scan(&lines);
    assert_eq!(diagnostics, scan_str(text), "scan is not split invariant");
    assert_eq!(diagnostics, scan(&lines), "scan is not deterministic");

    for diagnostic in &diagnostics {
        let expected = match diagnostic.kind {
            DiagnosticKind::UnexpectedClose(bracket) => bracket.close_char(),
            DiagnosticKind::Unclosed(bracket) => bracket.open_char(),
            DiagnosticKind::Unterminated(_) => unreachable!("not enabled"),
        };
        assert_eq!(chars.get(diagnostic.position.offset), Some(&expected));
        let line = lines[diagnostic.position.line - 1];
        assert_eq!(line.chars().nth(diagnostic.position.column - 1), Some(expected));
    }

    // Reporting unterminated constructs only ever appends.
    let extended = scan_with(
        &lines,
        ScanOptions {
            report_unterminated: true,
        },
    );
    assert!(extended.starts_with(&diagnostics));
    assert!(extended.len() <= diagnostics.len() + 1);
}

fuzz_target!(|input: Input| check(&input.into_text()));
