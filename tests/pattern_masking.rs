use wildmask::{WildcardPattern, mask};

#[test]
fn mask_when_star_suffix_matches_then_wildcard_chars_are_kept() {
    let pattern = WildcardPattern::compile("*.txt", None);
    assert_eq!(pattern.mask("report.txt"), Some("report".to_string()));
}

#[test]
fn mask_when_input_does_not_match_then_none() {
    let pattern = WildcardPattern::compile("*.txt", None);
    assert_eq!(pattern.mask("report.pdf"), None);
}

#[test]
fn mask_when_literal_only_pattern_then_mask_is_empty() {
    let pattern = WildcardPattern::compile("/plain/path", Some('/'));
    assert_eq!(pattern.mask("/plain/path"), Some(String::new()));
    assert_eq!(pattern.mask("/other/path"), None);
}

#[test]
fn mask_when_question_and_plus_consume_then_their_chars_are_kept() {
    assert_eq!(
        WildcardPattern::compile("a?c", None).mask("abc"),
        Some("b".to_string())
    );
    assert_eq!(
        WildcardPattern::compile("a+c", Some('/')).mask("axc"),
        Some("x".to_string())
    );
}

#[test]
fn mask_when_star_star_swallows_everything_then_whole_input_is_kept() {
    let pattern = WildcardPattern::compile("**", Some('/'));
    assert_eq!(pattern.mask("a/b/c"), Some("a/b/c".to_string()));
}

#[test]
fn mask_when_prefix_pattern_strips_the_prefix() {
    let pattern = WildcardPattern::compile("/static/*", Some('/'));
    assert_eq!(pattern.mask("/static/logo.png"), Some("logo.png".to_string()));
}

#[test]
fn mask_when_leading_star_star_then_leading_separators_are_trimmed() {
    let pattern = WildcardPattern::compile("**/b", Some('/'));
    assert_eq!(pattern.mask("/a/b"), Some("a/".to_string()));
    assert_eq!(pattern.mask("x/a/b"), Some("x/a/".to_string()));
}

#[test]
fn mask_when_separator_follows_consuming_star_then_separator_is_kept() {
    let pattern = WildcardPattern::compile("a*/b", Some('/'));
    assert_eq!(pattern.mask("ax/b"), Some("x/".to_string()));
    // Star consumed nothing, so the separator is not part of the mask.
    assert_eq!(pattern.mask("a/b"), Some(String::new()));
}

#[test]
fn mask_when_star_star_has_interior_anchor_then_crossed_segments_are_kept() {
    let pattern = WildcardPattern::compile("**/static/**", Some('/'));
    assert_eq!(
        pattern.mask("a/b/static/c/d"),
        Some("a/b/c/d".to_string())
    );
}

#[test]
fn mask_succeeds_exactly_when_matches_succeeds() {
    let sources = [
        ("*.txt", None),
        ("a?c", None),
        ("a+c", Some('/')),
        ("/api/**/users", Some('/')),
        ("**/static/**", Some('/')),
        ("*ab", None),
        ("**a", Some('/')),
        ("**ab*", Some('/')),
        ("/a/*", Some('/')),
        ("", None),
    ];
    let inputs = [
        "",
        "a",
        "b",
        "ab",
        "aab",
        "xab",
        "a.txt",
        "report.txt",
        "report.pdf",
        "abc",
        "axc",
        "a/c",
        "/api/users",
        "/api/v1/users",
        "a/b/static/c/d",
        "/a/",
        "/a/b",
    ];

    for (source, separator) in sources {
        let pattern = WildcardPattern::compile(source, separator);
        for input in inputs {
            assert_eq!(
                pattern.mask(input).is_some(),
                pattern.matches(input),
                "mirror invariant broken for pattern {source:?} on {input:?}"
            );
        }
    }
}

#[test]
fn mask_free_function_agrees_with_method() {
    let pattern = WildcardPattern::compile("*.log", None);
    assert_eq!(mask(&pattern, "app.log"), pattern.mask("app.log"));
}

#[test]
fn mask_when_empty_pattern_then_empty_input_masks_to_empty() {
    let pattern = WildcardPattern::compile("", None);
    assert_eq!(pattern.mask(""), Some(String::new()));
    assert_eq!(pattern.mask("a"), None);
}
