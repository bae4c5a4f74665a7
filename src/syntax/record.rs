//! Grouping of lines into records and structures.
//!
//! A structure is the run of lines starting at an introducing line with some
//! root level `r`, followed by every line with a level greater than `r`. It
//! ends at the next line whose level is `<= r`. Lines with an unreadable
//! level never end a structure; they stay inside it and are skipped by the
//! interpreters.
//!
//! Top-level records are structures with root level 0.

use crate::base::constants::BYTE_ORDER_MARK;

use super::line::Line;

/// A top-level record: the lines from one level-0 line up to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    lines: Vec<Line>,
}

impl Record {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// The introducing line, if the record is non-empty.
    pub fn head(&self) -> Option<&Line> {
        self.lines.first()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Slice `lines` down to the structure introduced by `lines[0]`.
///
/// Returns the whole input when the introducing line's level is unreadable;
/// callers are expected to check the root first.
pub fn structure(lines: &[Line]) -> &[Line] {
    let Some((root, rest)) = lines.split_first() else {
        return lines;
    };
    let Ok(root_level) = root.level() else {
        return lines;
    };
    let end = rest
        .iter()
        .position(|line| matches!(line.level(), Ok(level) if level <= root_level))
        .map_or(lines.len(), |index| index + 1);
    &lines[..end]
}

/// Iterate over the direct substructures of the structure in `lines`.
///
/// Each item is the slice for one child structure, starting at a line one or
/// more levels below the root that is not itself nested in an earlier child.
/// Lines with unreadable levels are skipped and logged.
pub fn children(lines: &[Line]) -> Children<'_> {
    Children {
        lines: lines.get(1..).unwrap_or_default(),
    }
}

/// Iterator returned by [`children`].
pub struct Children<'a> {
    lines: &'a [Line],
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a [Line];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let first = self.lines.first()?;
            if let Err(e) = first.level() {
                tracing::warn!(error = %e, "skipping line");
                self.lines = &self.lines[1..];
                continue;
            }
            let child = structure(self.lines);
            self.lines = &self.lines[child.len()..];
            return Some(child);
        }
    }
}

/// Splits a stream of raw lines into top-level records.
///
/// A new record starts at every line whose level reads as 0. The byte-order
/// mark is stripped from the first line only. Blank lines are dropped.
pub struct RecordSplitter<I> {
    lines: I,
    pending: Vec<Line>,
    first: bool,
}

impl<I> RecordSplitter<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            pending: Vec::new(),
            first: true,
        }
    }
}

impl<I> Iterator for RecordSplitter<I>
where
    I: Iterator<Item = String>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for mut raw in self.lines.by_ref() {
            if std::mem::take(&mut self.first) && raw.starts_with(BYTE_ORDER_MARK) {
                raw.replace_range(..BYTE_ORDER_MARK.len_utf8(), "");
            }
            if raw.ends_with('\r') {
                raw.pop();
            }
            if raw.trim().is_empty() {
                continue;
            }

            let line = Line::new(raw);
            if line.level() == Ok(0) && !self.pending.is_empty() {
                let record = std::mem::replace(&mut self.pending, vec![line]);
                return Some(Record::new(record));
            }
            self.pending.push(line);
        }

        if self.pending.is_empty() {
            None
        } else {
            Some(Record::new(std::mem::take(&mut self.pending)))
        }
    }
}
