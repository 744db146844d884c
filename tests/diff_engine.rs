use toolbelt::diff::{DiffOptions, LineKind, compute_diff};

fn plain() -> DiffOptions {
    DiffOptions::default()
}

#[test]
fn identical_inputs_yield_only_equal_records() {
    for text in ["a", "a\nb\nc", "", "one\n\nthree"] {
        let report = compute_diff(text, text, &plain());
        assert!(report.records.iter().all(|r| r.kind == LineKind::Equal));
        assert_eq!(report.summary.added, 0);
        assert_eq!(report.summary.removed, 0);
        assert_eq!(report.summary.modified, 0);
        assert_eq!(report.summary.equal, report.records.len());
    }
}

#[test]
fn record_count_is_max_of_both_line_counts() {
    let cases = [
        ("a\nb\nc", "a", 3),
        ("a", "a\nb\nc\nd", 4),
        ("", "", 1),
        ("x\ny", "p\nq", 2),
    ];
    for (left, right, expected) in cases {
        let report = compute_diff(left, right, &plain());
        assert_eq!(report.records.len(), expected, "{:?} vs {:?}", left, right);
        let s = report.summary;
        assert_eq!(s.equal + s.added + s.removed + s.modified, expected);
    }
}

#[test]
fn modified_line_in_the_middle() {
    let report = compute_diff("a\nb\nc", "a\nx\nc", &plain());

    let shape: Vec<(usize, LineKind, &str, &str)> = report
        .records
        .iter()
        .map(|r| (r.line_number, r.kind, r.left.as_str(), r.right.as_str()))
        .collect();
    assert_eq!(
        shape,
        vec![
            (1, LineKind::Equal, "a", "a"),
            (2, LineKind::Modified, "b", "x"),
            (3, LineKind::Equal, "c", "c"),
        ]
    );
    assert_eq!(report.summary.equal, 2);
    assert_eq!(report.summary.modified, 1);
    assert_eq!(report.summary.added, 0);
    assert_eq!(report.summary.removed, 0);
}

#[test]
fn shorter_right_side_reports_removed_lines() {
    let report = compute_diff("a\nb", "a", &plain());
    assert_eq!(report.records[0].kind, LineKind::Equal);
    assert_eq!(report.records[1].kind, LineKind::Removed);
    assert_eq!(report.records[1].left, "b");
    assert_eq!(report.records[1].right, "");
    assert_eq!(report.summary.equal, 1);
    assert_eq!(report.summary.removed, 1);
}

// A single insertion at the top must shift everything after it into
// Modified; the engine aligns by index and never resynchronizes.
#[test]
fn inserted_line_does_not_resync() {
    let report = compute_diff("a\nb\nc", "x\na\nb\nc", &plain());

    let kinds: Vec<LineKind> = report.records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Modified,
            LineKind::Modified,
            LineKind::Modified,
            LineKind::Added,
        ]
    );
    assert_eq!(report.records[0].left, "a");
    assert_eq!(report.records[0].right, "x");
    assert_eq!(report.records[3].left, "");
    assert_eq!(report.records[3].right, "c");
}

#[test]
fn ignore_case_only_moves_records_toward_equal() {
    let left = "Alpha\nbeta\nGAMMA";
    let right = "alpha\nBeta\ndelta";

    let strict = compute_diff(left, right, &plain());
    let folded = compute_diff(
        left,
        right,
        &DiffOptions {
            ignore_case: true,
            ..Default::default()
        },
    );

    assert!(folded.summary.equal >= strict.summary.equal);
    for (s, f) in strict.records.iter().zip(folded.records.iter()) {
        if s.kind == LineKind::Equal {
            assert_eq!(f.kind, LineKind::Equal);
        }
    }
    // "delta" still differs with case folded.
    assert_eq!(folded.records[2].kind, LineKind::Modified);
}

#[test]
fn whitespace_normalization_applies_before_the_split() {
    let options = DiffOptions {
        ignore_whitespace: true,
        ..Default::default()
    };
    // Indentation and trailing spaces stop mattering...
    let report = compute_diff("  a  b  ", "a b", &options);
    assert_eq!(report.summary.equal, 1);
    assert_eq!(report.records.len(), 1);

    // ...and a run containing a newline merges lines on that side.
    let merged = compute_diff("one\ntwo", "one two", &options);
    assert_eq!(merged.records.len(), 1);
    assert_eq!(merged.records[0].kind, LineKind::Equal);
}

#[test]
fn blank_vs_content_line_counts_as_added() {
    let report = compute_diff("a\n", "a\nb", &plain());
    assert_eq!(report.records[1].kind, LineKind::Added);
    assert_eq!(report.summary.added, 1);
}
