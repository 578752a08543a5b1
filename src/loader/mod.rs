mod error;
mod lint;

pub use error::{LoadError, LoadResult};

use crate::action::parse_action;
use crate::method::HttpMethod;
use crate::pattern::{PatternError, compile_template};
use crate::table::{CompiledRoute, RouteTable};

pub const COMMENT_MARKER: char = '#';

/// Builds a route table from the full text of a route-definition source.
///
/// One route per non-comment, non-blank line: `METHOD PATH ACTION`, with
/// arbitrary whitespace runs between the three fields. The action field
/// extends to end of line, so static-argument lists may contain spaces.
/// The prefix (with any trailing `/` trimmed) is prepended to every path
/// before compilation. Loading is all-or-nothing.
pub fn load(source: &str, prefix: &str) -> LoadResult<RouteTable> {
    let prefix = prefix.trim_end_matches('/');
    let mut routes: Vec<CompiledRoute> = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let (method_token, path_token, action_token) =
            split_route_line(line).ok_or_else(|| LoadError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;

        let method = HttpMethod::parse(method_token).ok_or_else(|| LoadError::UnknownMethod {
            line: line_no,
            method: method_token.to_string(),
        })?;

        // Validate the declared path before prefixing, so a bad declaration
        // is reported even when the prefix would mask it.
        if !path_token.starts_with('/') {
            return Err(LoadError::Pattern {
                line: line_no,
                source: PatternError::MissingLeadingSlash {
                    template: path_token.to_string(),
                },
            });
        }

        let template = format!("{prefix}{path_token}");
        let segments = compile_template(&template).map_err(|source| LoadError::Pattern {
            line: line_no,
            source,
        })?;
        let action = parse_action(action_token).map_err(|source| LoadError::Action {
            line: line_no,
            source,
        })?;

        let order = routes.len() as u32;
        routes.push(CompiledRoute::new(method, template, segments, action, order));
    }

    let shadow_warnings = lint::find_shadowed(&routes);
    for warning in &shadow_warnings {
        tracing::warn!(
            shadowed = %routes[warning.shadowed as usize].template(),
            shadowed_by = %routes[warning.shadowed_by as usize].template(),
            "route is unreachable; an earlier route matches every path it accepts"
        );
    }
    tracing::debug!(routes = routes.len(), prefix = %prefix, "route table loaded");

    Ok(RouteTable::new(routes, prefix.to_string(), shadow_warnings))
}

fn split_route_line(line: &str) -> Option<(&str, &str, &str)> {
    let (method, rest) = next_token(line)?;
    let (path, rest) = next_token(rest)?;
    let action = rest.trim();
    if action.is_empty() {
        return None;
    }
    Some((method, path, action))
}

fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}
