use thiserror::Error;

use crate::action::ActionError;
use crate::pattern::PatternError;

/// A fatal load-time failure. Any line-level error aborts the whole load;
/// a partially built table is never exposed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: route must be 'METHOD PATH ACTION', got '{content}'")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: unknown HTTP method '{method}'")]
    UnknownMethod { line: usize, method: String },
    #[error("line {line}: {source}")]
    Pattern {
        line: usize,
        #[source]
        source: PatternError,
    },
    #[error("line {line}: {source}")]
    Action {
        line: usize,
        #[source]
        source: ActionError,
    },
}

impl LoadError {
    /// 1-based source line the load failed on.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. }
            | Self::UnknownMethod { line, .. }
            | Self::Pattern { line, .. }
            | Self::Action { line, .. } => *line,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
