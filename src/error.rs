use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

/// Failures the scanner recognizes by kind. Anything else travels as a plain
/// `anyhow::Error` with context attached.
#[derive(Debug)]
pub enum ScanError {
    LogNotFound { path: PathBuf },
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::LogNotFound { path } => {
                write!(f, "Log file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ScanError {}
