use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors from reading input. Scanning itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
