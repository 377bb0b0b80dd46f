//! `bracketcheck [PATH]`: report unmatched brackets in a C-like source file.
//!
//! `PATH` defaults to `test.cpp`. The report goes to stdout and logs to
//! stderr. The exit status is success whenever the file could be read, even
//! if unmatched brackets were found.

use anyhow::{Context, Result};
use bracketcheck::{Report, ReportOptions, ScanOptions, io::check_file};
use tracing::{error, info};

const DEFAULT_PATH: &str = "test.cpp";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PATH.to_string());

    let diagnostics = match check_file(&path, ScanOptions::default()) {
        Ok(diagnostics) => diagnostics,
        Err(e) => {
            error!("Failed to check {}: {}", path, e);
            return Err(e).with_context(|| format!("checking {path}"));
        }
    };

    info!(path = %path, unmatched = diagnostics.len(), "scan complete");
    println!("{}", Report::new(&diagnostics, ReportOptions::default()));
    Ok(())
}
