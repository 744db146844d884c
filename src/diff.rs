use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default)]
pub struct DiffOptions {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Equal,
    Added,
    Removed,
    Modified,
}

/// One classified comparison outcome between the left and right text at a
/// shared 1-based index. `left`/`right` hold the line content of the working
/// copy used for comparison, so normalization shows through in the records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub line_number: usize,
    pub kind: LineKind,
    pub left: String,
    pub right: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub equal: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiffReport {
    pub records: Vec<LineRecord>,
    pub summary: DiffSummary,
}

/// Compares two texts line by line at matching indices. This is a positional
/// diff: a single inserted line shifts everything after it into `Modified`
/// instead of resynchronizing the way an edit-distance diff would. Total over
/// all inputs; the record count is `max` of the two line counts.
pub fn compute_diff(left: &str, right: &str, options: &DiffOptions) -> DiffReport {
    let left = normalize(left, options);
    let right = normalize(right, options);

    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();

    let total = left_lines.len().max(right_lines.len());
    let mut records = Vec::with_capacity(total);
    let mut summary = DiffSummary::default();

    for i in 0..total {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        let kind = classify(l, r);
        match kind {
            LineKind::Equal => summary.equal += 1,
            LineKind::Added => summary.added += 1,
            LineKind::Removed => summary.removed += 1,
            LineKind::Modified => summary.modified += 1,
        }
        records.push(LineRecord {
            line_number: i + 1,
            kind,
            left: l.to_string(),
            right: r.to_string(),
        });
    }

    DiffReport { records, summary }
}

fn classify(left: &str, right: &str) -> LineKind {
    if left == right {
        LineKind::Equal
    } else if !left.is_empty() && right.is_empty() {
        LineKind::Removed
    } else if left.is_empty() && !right.is_empty() {
        LineKind::Added
    } else {
        LineKind::Modified
    }
}

// Case folding runs before whitespace collapsing, and both run on the whole
// blob before it is split into lines. A collapsed run that spans a newline
// therefore merges the surrounding lines; that coupling is intentional.
fn normalize(text: &str, options: &DiffOptions) -> String {
    let mut text = if options.ignore_case {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    if options.ignore_whitespace {
        text = collapse_whitespace(&text);
    }
    text
}

/// Collapses every whitespace run to a single space and trims both ends.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            in_run = true;
        } else {
            if in_run && !out.is_empty() {
                out.push(' ');
            }
            in_run = false;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/diff_tests.rs"]
mod tests;
