mod compiler;
mod error;
mod matcher;
mod segment;

pub use compiler::compile_template;
pub use error::{PatternError, PatternResult};
pub use matcher::{CaptureList, ParamSpan, match_path};
pub(crate) use matcher::count_segments;
pub use segment::{ParamConstraint, PathSegment};
