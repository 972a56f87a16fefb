use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use crate::catalog::{EpisodeKey, Titles};
use crate::clean::{DialogueLine, Script};
use crate::Result;

/// Every script we managed to fetch and clean, keyed by episode.
pub type ScriptCollection = BTreeMap<EpisodeKey, Script>;

/// Same shape as `ScriptCollection`, so a result can be searched again to narrow it down.
pub type TopicResult = ScriptCollection;

/// A set of substrings to look for. Matching is case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topics(BTreeSet<String>);

impl Topics {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Topics {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Keeps only the topical lines of each script.
/// Every key of `scripts` is in the result, episodes without a match get an empty `Vec`.
pub fn find_lines(topics: &Topics, scripts: &ScriptCollection, numerals: bool) -> TopicResult {
    let mut topical = TopicResult::new();
    for (key, script) in scripts {
        let lines = script
            .iter()
            .filter(|line| is_topical(topics, &line.text, numerals))
            .cloned()
            .collect();
        topical.insert(*key, lines);
    }
    topical
}

/// True if `line` contains any of the topics as a plain substring ("cat" is found in
/// "category"). With `numerals` set a line that has any decimal digit also counts.
pub fn is_topical(topics: &Topics, line: &str, numerals: bool) -> bool {
    if topics.iter().any(|topic| line.contains(topic)) {
        return true;
    }
    if numerals {
        return line.chars().any(|c| c.is_ascii_digit());
    }
    false
}

/// Writes the key, the title and the lines of every episode that has any lines,
/// with a blank line after each episode.
pub fn write_lines<W: Write>(out: &mut W, titles: &Titles, lines: &TopicResult) -> Result<()> {
    for (key, episode_lines) in lines.iter().filter(|(_, l)| !l.is_empty()) {
        writeln!(out, "{key}")?;
        writeln!(out, "{}", titles.get(key).map(String::as_str).unwrap_or_default())?;
        for line in episode_lines {
            write_line(out, line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_line<W: Write>(out: &mut W, line: &DialogueLine) -> io::Result<()> {
    writeln!(out, "{line}")
}

pub fn print_lines(titles: &Titles, lines: &TopicResult) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, titles, lines)?;
    out.flush()?;
    Ok(())
}
