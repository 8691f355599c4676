use wildmask::{
    IncludeExcludeWildcardPatterns, RelativeComplementWildcardPatterns, WildcardPattern,
    WildcardPatterns,
};

#[test]
fn patterns_when_any_member_matches_then_the_set_matches() {
    let set = WildcardPatterns::compile(["/admin/**", "/public/*"], Some('/'))
        .expect("non-empty pattern list should compile to a set");

    assert!(set.matches_any("/admin/users/42"));
    assert!(set.matches_any("/public/logo.png"));
    assert!(!set.matches_any("/private/data"));
    assert_eq!(set.patterns().len(), 2);
}

#[test]
fn patterns_when_list_is_empty_then_no_set_is_built() {
    assert!(WildcardPatterns::compile(Vec::<String>::new(), Some('/')).is_none());
    assert!(WildcardPatterns::from_patterns(Vec::new()).is_none());
}

#[test]
fn include_exclude_when_excluded_then_the_include_match_is_overridden() {
    let filter = IncludeExcludeWildcardPatterns::compile(
        ["/admin/**", "/public/*"],
        ["/admin/login"],
        Some('/'),
    );

    assert!(filter.matches("/admin/dash"));
    assert!(filter.matches("/public/logo.png"));
    assert!(!filter.matches("/admin/login"));
    assert!(!filter.matches("/other"));
}

#[test]
fn include_exclude_when_no_includes_then_everything_not_excluded_passes() {
    let filter = IncludeExcludeWildcardPatterns::compile(
        Vec::<String>::new(),
        ["*.tmp", "*.bak"],
        None,
    );

    assert!(!filter.has_include_patterns());
    assert!(filter.has_exclude_patterns());
    assert!(filter.matches("report.txt"));
    assert!(!filter.matches("report.tmp"));
    assert!(!filter.matches("report.bak"));
}

#[test]
fn include_exclude_when_no_excludes_then_only_includes_decide() {
    let filter =
        IncludeExcludeWildcardPatterns::compile(["*.rs"], Vec::<String>::new(), None);

    assert!(filter.has_include_patterns());
    assert!(!filter.has_exclude_patterns());
    assert!(filter.matches("main.rs"));
    assert!(!filter.matches("main.py"));
}

#[test]
fn include_exclude_when_both_sides_are_empty_then_everything_passes() {
    let filter = IncludeExcludeWildcardPatterns::compile(
        Vec::<String>::new(),
        Vec::<String>::new(),
        Some('/'),
    );

    assert!(!filter.has_patterns());
    assert!(filter.matches("/anything/at/all"));
    assert!(filter.matches(""));
}

#[test]
fn include_exclude_can_be_assembled_from_prebuilt_sets() {
    let include = WildcardPatterns::from_patterns(vec![WildcardPattern::compile(
        "/api/**",
        Some('/'),
    )]);
    let filter = IncludeExcludeWildcardPatterns::from_patterns(include, None);

    assert!(filter.has_patterns());
    assert!(filter.matches("/api/v1/users"));
    assert!(!filter.matches("/web/index.html"));
    assert_eq!(
        filter
            .include_patterns()
            .map(|set| set.patterns().len()),
        Some(1)
    );
    assert!(filter.exclude_patterns().is_none());
}

#[test]
fn relative_complement_alias_names_the_same_combinator() {
    let filter: RelativeComplementWildcardPatterns =
        IncludeExcludeWildcardPatterns::compile(["/a/**"], ["/a/b"], Some('/'));

    assert!(filter.matches("/a/c"));
    assert!(!filter.matches("/a/b"));
}
