use crate::method::HttpMethod;
use thiserror::Error;

/// A routing miss. This is an expected, recoverable outcome (typically an
/// HTTP 404), not a fault in the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no route matched for method {method} and path '{path}'")]
    NotFound { method: HttpMethod, path: String },
}
