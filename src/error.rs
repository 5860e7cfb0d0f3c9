use std::path::PathBuf;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Debug)]
pub enum Error {
    IoError { path: PathBuf, source: std::io::Error },
    ParseError { path: PathBuf, message: String },
    InvalidArgument(String),
    /// An operation without `operationId`; aborts the whole generation
    MissingOperationId { method: String, path: String },
    /// An `operationId` that is neither a string nor a number
    InvalidOperationId {
        method: String,
        path: String,
        found: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IoError { path, source } => {
                write!(f, "IO error on {}: {}", path.display(), source)
            }
            Error::ParseError { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::MissingOperationId { method, path } => {
                write!(f, "endpoint {} {} miss operationId", method, path)
            }
            Error::InvalidOperationId {
                method,
                path,
                found,
            } => {
                write!(f, "endpoint {} {} has invalid operationId: {}", method, path, found)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError {
            path: PathBuf::from("<input>"),
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ParseError {
            path: PathBuf::from("<input>"),
            message: format!("YAML error: {}", err),
        }
    }
}

impl Error {
    /// Attach the file a parse error came from
    pub fn at_path(self, file: &std::path::Path) -> Self {
        match self {
            Error::ParseError { message, .. } => Error::ParseError {
                path: file.to_path_buf(),
                message,
            },
            other => other,
        }
    }
}
