use crate::matcher::{MatchError, MatchResult, captures_to_params};
use crate::method::HttpMethod;
use crate::pattern::{count_segments, match_path};
use crate::table::RouteTable;

/// Linear scan in declaration order. The first structural and regex match
/// wins, even if a later route would also match; method and segment-count
/// mismatches are rejected before any per-segment work.
pub(crate) fn find_route<'t>(
    table: &'t RouteTable,
    method: HttpMethod,
    path: &str,
) -> Result<MatchResult<'t>, MatchError> {
    let segment_count = count_segments(path);

    for route in table.routes() {
        if route.method() != method {
            continue;
        }
        if route.segments().len() != segment_count {
            continue;
        }
        if let Some(captures) = match_path(route.segments(), path) {
            let params = captures_to_params(path, captures);
            tracing::event!(
                tracing::Level::TRACE,
                operation = "find",
                template = %route.template(),
                order = route.order(),
                "route matched"
            );
            return Ok(MatchResult::new(route, params, method, path.to_string()));
        }
    }

    Err(MatchError::NotFound {
        method,
        path: path.to_string(),
    })
}
