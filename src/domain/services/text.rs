/// Normalises an indented multi-line literal: every line is trimmed, the result
/// is trimmed as a whole and any trailing line breaks are dropped.
pub fn strip_indents(value: &str) -> String {
    value
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .trim_end_matches(['\r', '\n'])
        .to_string()
}
