use similar::TextDiff;

/// Lines of unchanged context shown around each hunk
const CONTEXT_LINES: usize = 3;

/// Render a unified diff between the original and patched text.
///
/// Returns an empty string when nothing changed.
pub fn unified_diff(path_label: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let old_header = format!("a/{}", path_label);
    let new_header = format!("b/{}", path_label);

    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&old_header, &new_header)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_has_no_diff() {
        assert_eq!(unified_diff("Main.java", "same\n", "same\n"), "");
    }

    #[test]
    fn test_diff_shows_changed_line() {
        let old = "one\ntwo\nthree\n";
        let new = "one\n2\nthree\n";

        let diff = unified_diff("src/Main.java", old, new);
        assert!(diff.contains("--- a/src/Main.java"));
        assert!(diff.contains("+++ b/src/Main.java"));
        assert!(diff.contains("-two\n"));
        assert!(diff.contains("+2\n"));
        assert!(diff.contains(" one\n"));
    }
}
