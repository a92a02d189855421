//! Alphabetical and top-N reports over word counts

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::counter::WordCounts;
use crate::error::Result;

/// Number of lines in the frequency report
pub const TOP_COUNT: usize = 20;

/// One `<word> : <count>` line of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub word: String,
    pub count: u64,
}

impl ReportLine {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.word, self.count)
    }
}

impl WordCounts {
    fn lines(&self) -> Vec<ReportLine> {
        self.iter()
            .map(|(word, count)| ReportLine::new(word, count))
            .collect()
    }

    /// Every entry, sorted by word in byte order
    pub fn alphabetical(&self) -> Vec<ReportLine> {
        let mut lines = self.lines();
        lines.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        lines
    }

    /// The `n` most frequent entries, count descending then word ascending
    pub fn top(&self, n: usize) -> Vec<ReportLine> {
        let mut lines = self.lines();
        lines.sort_unstable_by(by_count_desc);
        lines.truncate(n);
        lines
    }
}

fn by_count_desc(a: &ReportLine, b: &ReportLine) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Write each line followed by a newline
pub fn write_lines(lines: &[ReportLine], out: &mut impl Write) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Count the file at `path` and write every word alphabetically
pub fn print_words(path: impl AsRef<Path>, out: &mut impl Write) -> Result<()> {
    let counts = WordCounts::from_file(path)?;
    write_lines(&counts.alphabetical(), out)
}

/// Count the file at `path` and write the [`TOP_COUNT`] most frequent words
pub fn print_top(path: impl AsRef<Path>, out: &mut impl Write) -> Result<()> {
    let counts = WordCounts::from_file(path)?;
    write_lines(&counts.top(TOP_COUNT), out)
}
