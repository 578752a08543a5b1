use hashbrown::HashSet;

use super::{ParamConstraint, PathSegment, PatternError, PatternResult};

/// Compiles one path template into its ordered segment sequence.
///
/// The template is split on `/`. A token of the form `{name}` becomes a
/// parameter with the default constraint, `{<regex>name}` a parameter with
/// an explicit constraint, anything else a literal. The root template `/`
/// compiles to a single empty literal segment, so it matches exactly the
/// request path `/`.
pub fn compile_template(template: &str) -> PatternResult<Vec<PathSegment>> {
    if !template.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash {
            template: template.to_string(),
        });
    }

    let mut segments = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for token in template[1..].split('/') {
        segments.push(parse_token(template, token, &mut seen)?);
    }

    Ok(segments)
}

fn parse_token<'t>(
    template: &'t str,
    token: &'t str,
    seen: &mut HashSet<&'t str>,
) -> PatternResult<PathSegment> {
    if let Some(inner) = token.strip_prefix('{') {
        let Some(inner) = inner.strip_suffix('}') else {
            return Err(PatternError::UnbalancedBraces {
                segment: token.to_string(),
            });
        };

        if inner.contains('{') || inner.contains('}') {
            return Err(PatternError::UnbalancedBraces {
                segment: token.to_string(),
            });
        }

        // The constraint ends at the first '>'; the grammar does not admit
        // '>' inside constraint text.
        let (raw_constraint, name) = match inner.strip_prefix('<') {
            Some(rest) => match rest.find('>') {
                Some(end) => (Some(&rest[..end]), &rest[end + 1..]),
                None => {
                    return Err(PatternError::UnterminatedConstraint {
                        segment: token.to_string(),
                    });
                }
            },
            None => (None, inner),
        };

        validate_param_name(token, name)?;

        if !seen.insert(name) {
            return Err(PatternError::DuplicateParameterName {
                template: template.to_string(),
                name: name.to_string(),
            });
        }

        let constraint = match raw_constraint {
            Some(raw) => {
                Some(
                    ParamConstraint::compile(raw).map_err(|err| PatternError::ConstraintInvalid {
                        name: name.to_string(),
                        error: err.to_string(),
                    })?,
                )
            }
            None => None,
        };

        return Ok(PathSegment::Param {
            name: name.to_string(),
            constraint,
        });
    }

    if token.contains('{') || token.contains('}') {
        return Err(PatternError::UnbalancedBraces {
            segment: token.to_string(),
        });
    }

    Ok(PathSegment::Static(token.to_string()))
}

fn validate_param_name(segment: &str, name: &str) -> PatternResult<()> {
    let bytes = name.as_bytes();

    if bytes.is_empty() {
        return Err(PatternError::ParameterMissingName {
            segment: segment.to_string(),
        });
    }

    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: segment.to_string(),
            name: name.to_string(),
            found: bytes[0] as char,
        });
    }

    for &c in &bytes[1..] {
        if !(c.is_ascii_alphanumeric() || c == b'_') {
            return Err(PatternError::ParameterInvalidCharacter {
                segment: segment.to_string(),
                name: name.to_string(),
                invalid: c as char,
            });
        }
    }

    Ok(())
}
