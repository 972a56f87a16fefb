const DOUBLE_SPACE: &str = "  ";

/// Collapses every run of spaces into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = text.to_owned();
    while out.contains(DOUBLE_SPACE) {
        out = out.replace(DOUBLE_SPACE, " ");
    }
    out
}

/// Turns carriage returns into spaces and then collapses the runs of spaces that leaves behind.
///
/// If the substitution leaves no double space the collapse is skipped, so a lone `\r` just
/// becomes a single space.
pub fn normalize_line_breaks(text: &str) -> String {
    let out = text.replace('\r', " ");
    if out.contains(DOUBLE_SPACE) {
        return normalize_whitespace(&out);
    }
    out
}
