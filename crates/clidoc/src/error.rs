use std::fmt;
use std::path::PathBuf;

/// Result type for clidoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving fragments or rendering
#[derive(Debug)]
pub enum Error {
    /// A fragment file exists but could not be read
    Fragment {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No directory and no embedded default provides the fragment
    FragmentNotFound { name: String },
    /// Template parsing or rendering failed
    Template(minijinja::Error),
    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fragment { path, source } => {
                write!(f, "failed to read fragment {}: {}", path.display(), source)
            }
            Error::FragmentNotFound { name } => write!(f, "fragment not found: {}", name),
            Error::Template(err) => write!(f, "template error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fragment { source, .. } => Some(source),
            Error::FragmentNotFound { .. } => None,
            Error::Template(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Template(err)
    }
}
