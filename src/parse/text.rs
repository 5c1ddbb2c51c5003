//! Small text-field parsers used by the editor

/// Split a comma-separated word field, dropping blanks
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-blank, trimmed lines of a bulk paste field
pub fn bulk_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
