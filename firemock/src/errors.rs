use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for firemock operations.
///
/// Each kind names one category of failure so callers can match on it
/// instead of parsing messages.
///
/// # Examples
///
/// ```rust,ignore
/// use firemock::errors::{ErrorKind, FirestoreError, FirestoreResult};
///
/// fn example() -> FirestoreResult<()> {
///     Err(FirestoreError::new("Document already exists", ErrorKind::AlreadyExists))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A document with the resolved id already holds data
    AlreadyExists,
    /// The target document does not exist
    NotFound,
    /// A query clause or operation argument is malformed
    InvalidArgument,
    /// A path is empty, has empty segments or the wrong parity
    InvalidPath,
    /// A filter could not be evaluated
    FilterError,
    /// A configuration value was rejected
    ValidationError,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::AlreadyExists => write!(f, "Already exists"),
            ErrorKind::NotFound => write!(f, "Not found"),
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::InvalidPath => write!(f, "Invalid path"),
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom firemock error type.
///
/// `FirestoreError` carries a message, an [ErrorKind], an optional cause and the
/// backtrace captured where it was created.
///
/// # Examples
///
/// ```rust,ignore
/// use firemock::errors::{ErrorKind, FirestoreError};
///
/// let err = FirestoreError::new("No document to update", ErrorKind::NotFound);
///
/// let cause = FirestoreError::new("Empty path", ErrorKind::InvalidPath);
/// let err = FirestoreError::new_with_cause("Cannot open collection", ErrorKind::InvalidArgument, cause);
/// ```
#[derive(Clone)]
pub struct FirestoreError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<FirestoreError>>,
    backtrace: Atomic<Backtrace>,
}

impl FirestoreError {
    /// Creates a new `FirestoreError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        FirestoreError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `FirestoreError` that wraps an underlying cause.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: FirestoreError) -> Self {
        FirestoreError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&FirestoreError> {
        self.cause.as_deref()
    }
}

impl Display for FirestoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for FirestoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for FirestoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for firemock operations.
pub type FirestoreResult<T> = Result<T, FirestoreError>;

impl From<std::fmt::Error> for FirestoreError {
    fn from(err: std::fmt::Error) -> Self {
        FirestoreError::new(
            &format!("Formatting error: {}", err),
            ErrorKind::InternalError,
        )
    }
}

impl From<String> for FirestoreError {
    fn from(msg: String) -> Self {
        FirestoreError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for FirestoreError {
    fn from(msg: &str) -> Self {
        FirestoreError::new(msg, ErrorKind::InternalError)
    }
}
