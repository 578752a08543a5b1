use routefile_router_rs::pattern::{PathSegment, PatternError, compile_template, match_path};

#[test]
fn compiles_static_and_parameter_segments() {
    let segments = compile_template("/customer/{id}/orders").expect("template should compile");
    assert_eq!(segments.len(), 3);
    match &segments[0] {
        PathSegment::Static(literal) => assert_eq!(literal, "customer"),
        other => panic!("expected static segment, got {other:?}"),
    }
    match &segments[1] {
        PathSegment::Param { name, constraint } => {
            assert_eq!(name, "id");
            assert!(constraint.is_none());
        }
        other => panic!("expected parameter segment, got {other:?}"),
    }
    match &segments[2] {
        PathSegment::Static(literal) => assert_eq!(literal, "orders"),
        other => panic!("expected static segment, got {other:?}"),
    }
}

#[test]
fn keeps_constraint_text_verbatim() {
    let segments =
        compile_template("/customer/{<[0-9]+>customerid}").expect("template should compile");
    match &segments[1] {
        PathSegment::Param { name, constraint } => {
            assert_eq!(name, "customerid");
            let constraint = constraint.as_ref().expect("constraint should be present");
            assert_eq!(constraint.raw(), "[0-9]+");
        }
        other => panic!("expected parameter segment, got {other:?}"),
    }
}

#[test]
fn root_template_matches_only_root_path() {
    let segments = compile_template("/").expect("root template should compile");
    assert!(match_path(&segments, "/").is_some());
    assert!(match_path(&segments, "/home").is_none());
}

#[test]
fn match_returns_capture_spans_in_segment_order() {
    let segments = compile_template("/x/{a}/{b}").expect("template should compile");
    let path = "/x/foo/42";
    let captures = match_path(&segments, path).expect("path should match");
    assert_eq!(captures.len(), 2);

    let (name, (start, len)) = captures[0];
    assert_eq!(name, "a");
    assert_eq!(&path[start..start + len], "foo");

    let (name, (start, len)) = captures[1];
    assert_eq!(name, "b");
    assert_eq!(&path[start..start + len], "42");
}

#[test]
fn rejects_segment_count_mismatch() {
    let segments = compile_template("/a/{id}").expect("template should compile");
    assert!(match_path(&segments, "/a").is_none());
    assert!(match_path(&segments, "/a/1/extra").is_none());
}

#[test]
fn static_segments_match_case_sensitively() {
    let segments = compile_template("/Home").expect("template should compile");
    assert!(match_path(&segments, "/Home").is_some());
    assert!(match_path(&segments, "/home").is_none());
}

#[test]
fn trailing_slash_is_significant() {
    let segments = compile_template("/page").expect("template should compile");
    assert!(match_path(&segments, "/page").is_some());
    assert!(match_path(&segments, "/page/").is_none());
}

#[test]
fn default_constraint_rejects_empty_segments() {
    let segments = compile_template("/page/{id}").expect("template should compile");
    assert!(match_path(&segments, "/page/").is_none());
}

#[test]
fn constraint_is_anchored_to_the_whole_segment() {
    let segments = compile_template("/n/{<[0-9]+>num}").expect("template should compile");
    assert!(match_path(&segments, "/n/123").is_some());
    assert!(match_path(&segments, "/n/12a").is_none());
    assert!(match_path(&segments, "/n/a12").is_none());
}

#[test]
fn rejects_unbalanced_braces() {
    match compile_template("/x/{id") {
        Err(PatternError::UnbalancedBraces { segment }) => assert_eq!(segment, "{id"),
        other => panic!("expected unbalanced braces error, got {other:?}"),
    }
    match compile_template("/x/id}") {
        Err(PatternError::UnbalancedBraces { .. }) => {}
        other => panic!("expected unbalanced braces error, got {other:?}"),
    }
}

#[test]
fn rejects_unterminated_constraint() {
    match compile_template("/x/{<[0-9]+id}") {
        Err(PatternError::UnterminatedConstraint { .. }) => {}
        other => panic!("expected unterminated constraint error, got {other:?}"),
    }
}

#[test]
fn rejects_empty_parameter_names() {
    match compile_template("/x/{}") {
        Err(PatternError::ParameterMissingName { .. }) => {}
        other => panic!("expected missing name error, got {other:?}"),
    }
    match compile_template("/x/{<[0-9]+>}") {
        Err(PatternError::ParameterMissingName { .. }) => {}
        other => panic!("expected missing name error, got {other:?}"),
    }
}

#[test]
fn rejects_invalid_parameter_names() {
    match compile_template("/x/{1id}") {
        Err(PatternError::ParameterInvalidStart { found, .. }) => assert_eq!(found, '1'),
        other => panic!("expected invalid start error, got {other:?}"),
    }
    match compile_template("/x/{id-raw}") {
        Err(PatternError::ParameterInvalidCharacter { invalid, .. }) => assert_eq!(invalid, '-'),
        other => panic!("expected invalid character error, got {other:?}"),
    }
}

#[test]
fn rejects_duplicate_parameter_names() {
    match compile_template("/x/{id}/{id}") {
        Err(PatternError::DuplicateParameterName { name, .. }) => assert_eq!(name, "id"),
        other => panic!("expected duplicate parameter error, got {other:?}"),
    }
    // a constrained re-declaration of the same name is still a duplicate
    match compile_template("/x/{id}/{<[0-9]+>id}") {
        Err(PatternError::DuplicateParameterName { name, .. }) => assert_eq!(name, "id"),
        other => panic!("expected duplicate parameter error, got {other:?}"),
    }
}

#[test]
fn rejects_invalid_constraint_regex() {
    match compile_template("/x/{<[>id}") {
        Err(PatternError::ConstraintInvalid { name, .. }) => assert_eq!(name, "id"),
        other => panic!("expected invalid constraint error, got {other:?}"),
    }
}

#[test]
fn rejects_template_without_leading_slash() {
    match compile_template("customer/{id}") {
        Err(PatternError::MissingLeadingSlash { .. }) => {}
        other => panic!("expected missing leading slash error, got {other:?}"),
    }
}
