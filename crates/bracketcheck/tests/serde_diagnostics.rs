#![allow(missing_docs)]
#![cfg(feature = "serde")]

use bracketcheck::{Diagnostic, ScanOptions, scan};

#[test]
fn diagnostics_serialize_with_kind_and_position() {
    let diagnostics = scan(["(]"]);
    insta::assert_snapshot!(serde_json::to_string(&diagnostics).unwrap(), @r#"[{"kind":{"UnexpectedClose":"Square"},"position":{"line":1,"column":2,"offset":1}},{"kind":{"Unclosed":"Paren"},"position":{"line":1,"column":1,"offset":0}}]"#);

    let back: Vec<Diagnostic> = serde_json::to_string(&diagnostics)
        .and_then(|json| serde_json::from_str(&json))
        .unwrap();
    assert_eq!(back, diagnostics);
}

#[test]
fn options_default_missing_fields() {
    let options: ScanOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, ScanOptions::default());
}
