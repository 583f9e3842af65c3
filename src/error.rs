//! Error types for the audit library.
//!
//! Per-asset and per-bucket probe failures never appear here: they are
//! recovered locally and become classification states in the report. Only
//! environment-level failures (unusable root, unwritable report) abort a
//! run.

use std::{error::Error as StdError, fmt, io, path::PathBuf};

/// Environment-level failures that abort an audit run.
#[derive(Debug)]
pub enum AuditError {
    /// The root path to scan does not exist.
    RootNotFound { path: PathBuf },
    /// The root path exists but is not a directory.
    RootNotADirectory { path: PathBuf },
    /// A bucket directory exists but could not be enumerated.
    Scan { path: PathBuf, source: io::Error },
    /// The report artifact could not be written.
    ReportWrite { path: PathBuf, source: io::Error },
}

impl AuditError {
    /// Create a missing-root error.
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Create a root-is-not-a-directory error.
    pub fn root_not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::RootNotADirectory { path: path.into() }
    }

    /// Create a bucket-scan error.
    pub fn scan(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Scan {
            path: path.into(),
            source,
        }
    }

    /// Create a report-write error.
    pub fn report_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReportWrite {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::RootNotFound { path } => {
                write!(f, "root path '{}' does not exist", path.display())
            }
            AuditError::RootNotADirectory { path } => {
                write!(f, "root path '{}' is not a directory", path.display())
            }
            AuditError::Scan { path, source } => {
                write!(
                    f,
                    "failed to scan bucket directory '{}': {}",
                    path.display(),
                    source
                )
            }
            AuditError::ReportWrite { path, source } => {
                write!(
                    f,
                    "failed to write report to '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl StdError for AuditError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Scan { source, .. } | Self::ReportWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias using the audit error type.
pub type AuditResult<T> = Result<T, AuditError>;
