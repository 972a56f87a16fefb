use std::fmt;

use crate::config::LINE_BREAK_MARKER;
use crate::normalize::normalize_line_breaks;

/// One line of dialogue and its position in the script it was split from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    pub index: usize,
    pub text: String,
}

impl fmt::Display for DialogueLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.index, self.text)
    }
}

pub type Script = Vec<DialogueLine>;

/// Normalizes the raw script markup and splits it on `<br>` into numbered lines.
///
/// Empty segments are kept so that `index` always matches the segment's position.
pub fn clean(raw_script: &str) -> Script {
    let normalized = normalize_line_breaks(raw_script);
    unify_line_breaks(&normalized)
        .split(LINE_BREAK_MARKER)
        .enumerate()
        .map(|(index, line)| DialogueLine {
            index,
            text: line.trim_start().to_owned(),
        })
        .collect()
}

// html5ever serializes `<br>`, other sources give us `<br/>` or `<br />`.
fn unify_line_breaks(text: &str) -> String {
    text.replace("<br />", LINE_BREAK_MARKER)
        .replace("<br/>", LINE_BREAK_MARKER)
}
