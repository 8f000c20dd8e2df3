use super::api::{parse, Expression};

fn components(source: &str) -> Vec<String> {
    Expression::parse(source).components().to_vec()
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_single_identifier() {
    assert_eq!(components("Math"), strings(&["Math"]));
}

#[test]
fn test_dotted_chain_keeps_order() {
    assert_eq!(components("a.b.c"), strings(&["a", "b", "c"]));
}

#[test]
fn test_empty_components_are_preserved() {
    assert_eq!(components("a..b"), strings(&["a", "", "b"]));
    assert_eq!(components(".a"), strings(&["", "a"]));
    assert_eq!(components("a."), strings(&["a", ""]));
}

#[test]
fn test_empty_source_is_one_empty_component() {
    assert_eq!(parse(""), strings(&[""]));
}

#[test]
fn test_no_trimming_or_special_syntax() {
    assert_eq!(components(" a . b"), strings(&[" a ", " b"]));
    assert_eq!(components("Math[\"cos\"]"), strings(&["Math[\"cos\"]"]));
    assert_eq!(components("x = 1"), strings(&["x = 1"]));
}

#[test]
fn test_source_is_kept_verbatim() {
    let e = Expression::parse("window.Math");
    assert_eq!(e.source(), "window.Math");
}

#[test]
fn test_identifier_chains_are_recognised() {
    for source in &["Math", "Math.cos", "$", "_private.$jq", "a1.b2", "café.ñ"] {
        assert!(
            Expression::parse(source).is_identifier_chain(),
            "{} should be an identifier chain",
            source
        );
    }
}

#[test]
fn test_non_identifier_syntax_is_flagged() {
    for source in &[
        "",
        "a..b",
        ".a",
        "a.",
        "1a",
        "Math[\"cos\"]",
        "Math.cos()",
        "x = 1",
        "a .b",
    ] {
        assert!(
            !Expression::parse(source).is_identifier_chain(),
            "{} should not be an identifier chain",
            source
        );
    }
}
