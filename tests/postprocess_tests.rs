use condense::summarize::clean_summary;

/// Tests for summary output normalization.

#[test]
fn test_placeholder_and_newlines_become_single_spaces() {
    let raw = "A<n>summary\n\nwith  spaces";
    assert_eq!(clean_summary(raw), "A summary with spaces");
}

#[test]
fn test_whitespace_runs_collapse_to_one_space() {
    assert_eq!(clean_summary("a \t b\r\n c"), "a b c");
    assert_eq!(clean_summary("a     b"), "a b");
}

#[test]
fn test_leading_and_trailing_whitespace_is_trimmed() {
    assert_eq!(clean_summary("  tidy output \n"), "tidy output");
}

#[test]
fn test_cleanup_is_idempotent() {
    let inputs = [
        "A<n>summary\n\nwith  spaces",
        "  already clean  ",
        "<n><n><n>",
        "no changes needed",
        "",
    ];
    for raw in inputs {
        let once = clean_summary(raw);
        let twice = clean_summary(&once);
        assert_eq!(
            once, twice,
            "cleaning twice should equal cleaning once for {raw:?}"
        );
    }
}

#[test]
fn test_degenerate_inputs_produce_empty_output() {
    assert_eq!(clean_summary(""), "");
    assert_eq!(clean_summary("<n>"), "");
    assert_eq!(clean_summary(" \n \n "), "");
}
