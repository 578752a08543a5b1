use memchr::{memchr, memchr_iter};
use smallvec::SmallVec;

use super::PathSegment;

/// Byte span `(start, len)` of a captured parameter inside the request path.
pub type ParamSpan = (usize, usize);
pub type CaptureList<'r> = SmallVec<[(&'r str, ParamSpan); 4]>;

/// Tests a request path against a compiled segment sequence, short-circuiting
/// on the first failing segment. On success returns the captured parameter
/// spans in segment order.
#[tracing::instrument(level = "trace", skip(segments, path), fields(path = %path, segments = segments.len() as u64))]
pub fn match_path<'r>(segments: &'r [PathSegment], path: &str) -> Option<CaptureList<'r>> {
    let bytes = path.as_bytes();

    if bytes.first() != Some(&b'/') {
        return None;
    }

    let mut captures: CaptureList<'r> = SmallVec::new();
    let mut cursor = 1usize;

    for segment in segments {
        if cursor > bytes.len() {
            return None;
        }

        let end = match memchr(b'/', &bytes[cursor..]) {
            Some(pos) => cursor + pos,
            None => bytes.len(),
        };
        // '/' is ASCII, so cursor and end always sit on char boundaries.
        let candidate = &path[cursor..end];

        match segment {
            PathSegment::Static(literal) => {
                if candidate != literal {
                    return None;
                }
            }
            PathSegment::Param { name, constraint } => {
                if candidate.is_empty() {
                    return None;
                }
                if let Some(constraint) = constraint
                    && !constraint.is_match(candidate)
                {
                    return None;
                }
                captures.push((name.as_str(), (cursor, end - cursor)));
            }
        }

        cursor = end + 1;
    }

    if cursor == bytes.len() + 1 {
        Some(captures)
    } else {
        None
    }
}

/// Number of `/`-delimited segments in a request path that starts with `/`.
pub(crate) fn count_segments(path: &str) -> usize {
    memchr_iter(b'/', path.as_bytes()).count()
}
