use std::fmt;

/// Errors raised by kernel-bridge itself.
///
/// Engine failures are not represented here: they travel through the
/// engine's own associated error type untouched.
#[derive(Debug)]
pub enum Error {
    /// The worker loop supplied request data that cannot form a `Request`
    Request(RequestError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Request(e) => write!(f, "Invalid request: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(e) => Some(e),
        }
    }
}

impl From<RequestError> for Error {
    fn from(e: RequestError) -> Self {
        Error::Request(e)
    }
}

/// Invalid input encountered while building a [`Request`](crate::Request).
///
/// # Examples
///
/// ```
/// use kernel_bridge::{Method, RequestErrorKind};
///
/// let err = "GE T".parse::<Method>().unwrap_err();
/// assert_eq!(err.kind(), RequestErrorKind::InvalidMethod);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    kind: RequestErrorKind,
    message: String,
}

impl RequestError {
    /// Creates a new request error.
    pub fn new(kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> RequestErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for RequestError {}

/// The kind of request construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// Method token is empty or contains non-token characters
    InvalidMethod,
    /// Header name is empty or contains non-token characters
    InvalidHeaderName,
    /// Request URI is empty
    EmptyUri,
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestErrorKind::InvalidMethod => write!(f, "invalid method"),
            RequestErrorKind::InvalidHeaderName => write!(f, "invalid header name"),
            RequestErrorKind::EmptyUri => write!(f, "empty URI"),
        }
    }
}
