use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while persisting a summary report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output directory could not be created.
    #[error("failed to create output directory `{}`", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,

        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// The report file could not be written.
    #[error("failed to write report file `{}`", path.display())]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,

        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}
