//! Error definitions.
use std::error::Error;
use std::{fmt, io, result};

/// A specialized Result type for this library.
pub type Result<T, E = DocsimError> = result::Result<T, E>;

/// Errors in docsim.
#[derive(Debug)]
pub enum DocsimError {
    /// Contains [`NotFoundError`].
    NotFound(NotFoundError),
    /// Contains [`InputError`].
    Input(InputError),
    /// A content provider failed to read a document.
    Io(io::Error),
}

impl fmt::Display for DocsimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(e) => e.fmt(f),
            Self::Input(e) => e.fmt(f),
            Self::Io(e) => write!(f, "IoError: {e}"),
        }
    }
}

impl Error for DocsimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DocsimError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl DocsimError {
    pub(crate) fn not_found<S>(id: S) -> Self
    where
        S: Into<String>,
    {
        Self::NotFound(NotFoundError { id: id.into() })
    }

    pub(crate) fn input(msg: String) -> Self {
        Self::Input(InputError { msg })
    }

    /// Checks if the error reports a missing document.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error used when a document id is absent at the content provider.
#[derive(Debug)]
pub struct NotFoundError {
    id: String,
}

impl NotFoundError {
    /// Gets the id that could not be resolved.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NotFoundError: document {} does not exist", self.id)
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug)]
pub struct InputError {
    msg: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = DocsimError::not_found("doc-1");
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "NotFoundError: document doc-1 does not exist");

        let e = DocsimError::input("bad id".to_string());
        assert!(!e.is_not_found());
        assert_eq!(e.to_string(), "InputError: bad id");
    }

    #[test]
    fn test_io_source() {
        let e = DocsimError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "IoError: disk");
    }
}
