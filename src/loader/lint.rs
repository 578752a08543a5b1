use crate::pattern::PathSegment;
use crate::table::{CompiledRoute, ShadowWarning};

/// Finds routes made unreachable by an earlier declaration. The check is
/// conservative: it only reports a shadow when every segment of the earlier
/// route provably subsumes the corresponding later segment, so it never
/// flags a reachable route.
pub(crate) fn find_shadowed(routes: &[CompiledRoute]) -> Vec<ShadowWarning> {
    let mut warnings = Vec::new();

    for (later_idx, later) in routes.iter().enumerate() {
        for earlier in &routes[..later_idx] {
            if shadows(earlier, later) {
                warnings.push(ShadowWarning {
                    shadowed: later.order(),
                    shadowed_by: earlier.order(),
                });
                break;
            }
        }
    }

    warnings
}

fn shadows(earlier: &CompiledRoute, later: &CompiledRoute) -> bool {
    earlier.method() == later.method()
        && earlier.segments().len() == later.segments().len()
        && earlier
            .segments()
            .iter()
            .zip(later.segments())
            .all(|(a, b)| subsumes(a, b))
}

fn subsumes(earlier: &PathSegment, later: &PathSegment) -> bool {
    match (earlier, later) {
        (PathSegment::Static(a), PathSegment::Static(b)) => a == b,
        (PathSegment::Static(_), PathSegment::Param { .. }) => false,
        (
            PathSegment::Param {
                constraint: None, ..
            },
            PathSegment::Static(literal),
        ) => !literal.is_empty(),
        (
            PathSegment::Param {
                constraint: None, ..
            },
            PathSegment::Param { .. },
        ) => true,
        (
            PathSegment::Param {
                constraint: Some(constraint),
                ..
            },
            PathSegment::Static(literal),
        ) => constraint.is_match(literal),
        (
            PathSegment::Param {
                constraint: Some(a),
                ..
            },
            PathSegment::Param {
                constraint: Some(b),
                ..
            },
        ) => a.raw() == b.raw(),
        (
            PathSegment::Param {
                constraint: Some(_),
                ..
            },
            PathSegment::Param {
                constraint: None, ..
            },
        ) => false,
    }
}
