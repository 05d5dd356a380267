use std::{fmt, io, path::PathBuf};

/// A fatal scan failure. Any error here aborts the whole listing; the
/// program never prints a partial table.
#[derive(Debug)]
pub enum ScanError {
    /// The directory itself could not be opened or enumerated.
    OpenDir { path: PathBuf, source: io::Error },
    /// Metadata for one named entry could not be read.
    Metadata { name: String, source: io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::OpenDir { path, source } => {
                write!(f, "cannot read directory {}: {source}", path.display())
            }
            ScanError::Metadata { name, source } => {
                write!(f, "cannot stat {name:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::OpenDir { source, .. } | ScanError::Metadata { source, .. } => Some(source),
        }
    }
}
