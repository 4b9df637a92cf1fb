use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the skin inverter
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// A directory entry that is neither a regular file nor a directory
    UnsupportedEntry { path: PathBuf },
    /// The destination lies inside the skin being walked
    DestinationInsideSource {
        source_root: PathBuf,
        destination: PathBuf,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::UnsupportedEntry { path } => {
                write!(f, "Neither a file nor a directory: {}", path.display())
            }
            Error::DestinationInsideSource {
                source_root,
                destination,
            } => {
                write!(
                    f,
                    "Destination {} is inside the source skin {}",
                    destination.display(),
                    source_root.display()
                )
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the skin inverter
///
/// # Examples
/// ```
/// use std::path::Path;
/// use skin_invert::prelude::{Result, path_operation_error};
///
/// fn skin_name(path: &Path) -> Result<String> {
///     path.file_name()
///         .map(|name| name.to_string_lossy().to_string())
///         .ok_or_else(|| path_operation_error(path.to_path_buf(), "get filename of"))
/// }
///
/// assert_eq!(skin_name(Path::new("skins/palemoon")).unwrap(), "palemoon");
/// assert!(skin_name(Path::new("/")).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an unsupported entry error
pub fn unsupported_entry_error(path: PathBuf) -> Error {
    Error::UnsupportedEntry { path }
}

/// Helper function to create a destination-inside-source error
pub fn destination_inside_source_error(source_root: PathBuf, destination: PathBuf) -> Error {
    Error::DestinationInsideSource {
        source_root,
        destination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/skins/palemoon/skin.xml");
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error = file_operation_error(io_error, path.clone(), "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/skins/palemoon/skin.xml"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some(), "Underlying io error should be kept");
    }

    #[test]
    fn test_path_operation_error() {
        let path = PathBuf::from("/skins/palemoon");
        let error = path_operation_error(path.clone(), "get filename of");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("get filename of"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/skins/palemoon"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_unsupported_entry_error() {
        let error = unsupported_entry_error(PathBuf::from("/skins/palemoon/broken-link"));

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/skins/palemoon/broken-link"),
            "Error message should contain the path"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_destination_inside_source_error() {
        let error = destination_inside_source_error(
            PathBuf::from("/skins/palemoon"),
            PathBuf::from("/skins/palemoon/palesun"),
        );

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/skins/palemoon/palesun"),
            "Error message should contain the destination"
        );
        assert!(error.source().is_none());
    }
}
