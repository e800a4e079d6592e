//! Line-based unified diffs.
//!
//! The diff is computed from a longest common subsequence table, which is
//! plenty for documents of a few dozen lines.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal,
    Delete,
    Insert,
}

/// An edit step, with the positions in both inputs before the step is applied.
#[derive(Debug, Clone, Copy)]
struct Step {
    op: Op,
    a: usize,
    b: usize,
}

fn steps(a: &[&str], b: &[&str]) -> Vec<Step> {
    let (n, m) = (a.len(), b.len());

    // lcs[i][j] is the length of the longest common subsequence of a[i..] and b[j..]
    let mut lcs = vec![vec![0_usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut steps = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        let op = if i < n && j < m && a[i] == b[j] {
            Op::Equal
        } else if j == m || (i < n && lcs[i + 1][j] >= lcs[i][j + 1]) {
            Op::Delete
        } else {
            Op::Insert
        };
        steps.push(Step { op, a: i, b: j });
        match op {
            Op::Equal => {
                i += 1;
                j += 1;
            }
            Op::Delete => i += 1,
            Op::Insert => j += 1,
        }
    }
    steps
}

fn range(start: usize, len: usize) -> String {
    match len {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{len}", start + 1),
    }
}

/// Produces a unified diff of two documents, split into lines.
///
/// The output starts with `---`/`+++` header lines naming `from` and `to`,
/// followed by `@@` hunks with `context` unchanged lines around each change.
/// Returns an empty vector when the inputs are identical.
#[must_use]
pub fn unified_diff(a: &[&str], b: &[&str], from: &str, to: &str, context: usize) -> Vec<String> {
    let steps = steps(a, b);
    let changes: Vec<usize> = steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step.op != Op::Equal)
        .map(|(index, _)| index)
        .collect();

    let Some((&first, rest)) = changes.split_first() else {
        return Vec::new();
    };

    // group changes whose unchanged gap fits inside the shared context
    let mut groups = Vec::new();
    let (mut start, mut previous) = (first, first);
    for &index in rest {
        if index - previous - 1 > context.saturating_mul(2) {
            groups.push((start, previous));
            start = index;
        }
        previous = index;
    }
    groups.push((start, previous));

    let mut lines = vec![format!("--- {from}"), format!("+++ {to}")];
    for (first_change, last_change) in groups {
        let low = first_change.saturating_sub(context);
        let high = last_change
            .saturating_add(context)
            .saturating_add(1)
            .min(steps.len());
        let hunk = &steps[low..high];

        let a_len = hunk.iter().filter(|step| step.op != Op::Insert).count();
        let b_len = hunk.iter().filter(|step| step.op != Op::Delete).count();
        lines.push(format!(
            "@@ -{} +{} @@",
            range(hunk[0].a, a_len),
            range(hunk[0].b, b_len)
        ));

        lines.extend(hunk.iter().map(|step| match step.op {
            Op::Equal => format!(" {}", a[step.a]),
            Op::Delete => format!("-{}", a[step.a]),
            Op::Insert => format!("+{}", b[step.b]),
        }));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Registry, Section};

    #[test]
    fn identical_inputs_produce_no_diff() {
        let lines = ["one", "two", "three"];
        assert!(unified_diff(&lines, &lines, "a", "b", 3).is_empty());
    }

    #[test]
    fn single_replacement() {
        let diff = unified_diff(&["x", "y"], &["x", "z"], "a", "b", 3);
        assert_eq!(diff, ["--- a", "+++ b", "@@ -1,2 +1,2 @@", " x", "-y", "+z"]);
    }

    #[test]
    fn insertion_into_empty_document() {
        let diff = unified_diff(&[], &["new"], "a", "b", 3);
        assert_eq!(diff, ["--- a", "+++ b", "@@ -0,0 +1 @@", "+new"]);
    }

    #[test]
    fn distant_changes_form_separate_hunks() {
        let a: Vec<String> = (1..=10).map(|n| format!("line {n}")).collect();
        let mut b = a.clone();
        b[0] = "changed first".to_string();
        b[9] = "changed last".to_string();
        let a: Vec<&str> = a.iter().map(String::as_str).collect();
        let b: Vec<&str> = b.iter().map(String::as_str).collect();

        let diff = unified_diff(&a, &b, "a", "b", 1);

        let headers: Vec<_> = diff.iter().filter(|line| line.starts_with("@@")).collect();
        assert_eq!(headers, ["@@ -1,2 +1,2 @@", "@@ -9,2 +9,2 @@"]);
    }

    #[test]
    fn nearby_changes_share_a_hunk() {
        let diff = unified_diff(&["a", "b", "c", "d"], &["A", "b", "c", "D"], "x", "y", 1);
        let headers: Vec<_> = diff.iter().filter(|line| line.starts_with("@@")).collect();
        assert_eq!(headers, ["@@ -1,4 +1,4 @@"]);
    }

    #[test]
    fn huge_context_yields_a_single_hunk() {
        let diff = unified_diff(&["a", "b"], &["a", "c"], "x", "y", usize::MAX);
        assert_eq!(diff, ["--- x", "+++ y", "@@ -1,2 +1,2 @@", " a", "-b", "+c"]);
    }

    #[test]
    fn profiles_differ_in_every_list() {
        let registry = Registry::builtin().unwrap();
        let aztec = render(registry.get("aztec").unwrap(), Section::Assets).to_string();
        let zama = render(registry.get("zama").unwrap(), Section::Assets).to_string();
        let a: Vec<_> = aztec.lines().collect();
        let b: Vec<_> = zama.lines().collect();

        let diff = unified_diff(&a, &b, "aztec (assets)", "zama (assets)", 3);

        assert_eq!(diff[0], "--- aztec (assets)");
        assert_eq!(diff.iter().filter(|line| line.starts_with('-')).count(), 6);
        assert_eq!(diff.iter().filter(|line| line.starts_with('+')).count(), 6);
    }
}
