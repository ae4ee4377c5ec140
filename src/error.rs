use std::fmt;

/// Custom error type for Flatfile API operations
///
/// Every HTTP exchange resolves to exactly one of these variants; callers
/// match exhaustively, so adding a variant breaks every match site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatfileError {
    /// Transport-level failure (network, DNS, TLS, timeout) before any
    /// response was obtained
    Request { reason: String },
    /// Response received but status code outside the accepted range
    Status {
        status: u16,
        min_inclusive: u16,
        max_exclusive: u16,
    },
    /// Response content-type header does not match what was expected
    ContentType { expected: String, actual: String },
    /// Response body failed shape validation; one entry per failed field
    Decode { errors: Vec<String> },
    /// Configuration error (missing or empty credentials, bad host)
    Config(String),
    /// Token exchange succeeded at the HTTP level but yielded no token
    Auth(String),
}

impl fmt::Display for FlatfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatfileError::Request { reason } => write!(f, "HTTP request failed: {}", reason),
            FlatfileError::Status {
                status,
                min_inclusive,
                max_exclusive,
            } => write!(
                f,
                "encountered status {} when expecting {} <= status < {}",
                status, min_inclusive, max_exclusive
            ),
            FlatfileError::ContentType { expected, actual } => write!(
                f,
                "unexpected content type '{}' (expected '{}')",
                actual, expected
            ),
            FlatfileError::Decode { errors } => {
                write!(f, "failed to decode response: {}", errors.join("; "))
            }
            FlatfileError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FlatfileError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
        }
    }
}

impl std::error::Error for FlatfileError {}

impl From<reqwest::Error> for FlatfileError {
    fn from(err: reqwest::Error) -> Self {
        FlatfileError::Request {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for Flatfile operations
pub type Result<T> = std::result::Result<T, FlatfileError>;
