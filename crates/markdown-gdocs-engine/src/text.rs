//! Position arithmetic over the destination buffer.
//!
//! The destination indexes its buffer in UTF-16 code units starting at 1,
//! so every length that feeds a position goes through [`text_len`].

/// Length of `s` in destination positions.
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Counts tab characters whose position lies in `[start, end)`.
pub fn count_tabs_between(text: &str, start: usize, end: usize) -> usize {
    let mut pos = 1;
    let mut tabs = 0;
    for ch in text.chars() {
        if pos >= end {
            break;
        }
        if ch == '\t' && pos >= start {
            tabs += 1;
        }
        pos += ch.len_utf16();
    }
    tabs
}

/// Counts tab characters strictly before position `pos`.
pub fn count_tabs_before(text: &str, pos: usize) -> usize {
    count_tabs_between(text, 1, pos)
}

/// Tab counts for every position of a fixed text, answering
/// [`count_tabs_before`] and [`count_tabs_between`] without a rescan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabIndex {
    /// `before[p]` is the number of tabs strictly before position `p`.
    before: Vec<usize>,
}

impl TabIndex {
    pub fn new(text: &str) -> Self {
        let mut before = Vec::with_capacity(text.len() + 2);
        before.extend([0, 0]);
        let mut tabs = 0;
        for ch in text.chars() {
            if ch == '\t' {
                tabs += 1;
            }
            for _ in 0..ch.len_utf16() {
                before.push(tabs);
            }
        }
        Self { before }
    }

    /// Same as [`count_tabs_before`] on the indexed text.
    pub fn before(&self, pos: usize) -> usize {
        self.before[pos.min(self.before.len() - 1)]
    }

    /// Same as [`count_tabs_between`] on the indexed text.
    pub fn between(&self, start: usize, end: usize) -> usize {
        self.before(end).saturating_sub(self.before(start))
    }
}
