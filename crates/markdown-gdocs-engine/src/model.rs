//! # Conversion Model
//!
//! Records produced by one walk over a token stream. All positions are
//! 1-indexed offsets into the destination buffer, measured in the
//! pre-correction coordinate space: list bulleting and table insertion have
//! not happened yet when these are recorded.

use std::fmt;

use crate::error::ConvertError;
use crate::text::text_len;

/// The style a [`FormatRange`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Heading,
    Bold,
    Italic,
    CodeInline,
    Link,
    CodeBlock,
    Blockquote,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatKind::Heading => "heading",
            FormatKind::Bold => "bold",
            FormatKind::Italic => "italic",
            FormatKind::CodeInline => "code_inline",
            FormatKind::Link => "link",
            FormatKind::CodeBlock => "code_block",
            FormatKind::Blockquote => "blockquote",
        };
        f.write_str(name)
    }
}

/// A half-open `[start, end)` interval tagged with a style.
///
/// Ranges are flat: a bold run inside an italic run is captured once, as
/// the outer span, with the inner marker folded into its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRange {
    pub start: usize,
    pub end: usize,
    pub kind: FormatKind,
    /// Heading level, 1..=6. Only set for [`FormatKind::Heading`].
    pub level: Option<u8>,
    /// Link target. Only set for [`FormatKind::Link`], empty when absent.
    pub url: Option<String>,
    /// The text the range covers, when known.
    pub text: Option<String>,
}

impl FormatRange {
    pub fn new(kind: FormatKind, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            kind,
            level: None,
            url: None,
            text: None,
        }
    }

    pub fn heading(start: usize, end: usize, level: u8, text: &str) -> Self {
        Self {
            level: Some(level),
            text: Some(text.to_string()),
            ..Self::new(FormatKind::Heading, start, end)
        }
    }

    pub fn link(start: usize, end: usize, url: &str, text: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            text: Some(text.to_string()),
            ..Self::new(FormatKind::Link, start, end)
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

/// One committed list item: leading tabs, text, and trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemRange {
    pub start: usize,
    pub end: usize,
    pub ordered: bool,
    /// Number of enclosing lists above this item's own list; 0 at the top.
    pub nesting_level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub content: String,
    pub is_header: bool,
}

/// A table recorded at `insert_index`, where a single `\n` placeholder
/// stands in for it in the plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub insert_index: usize,
    pub rows: Vec<Vec<TableCell>>,
}

impl TableData {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the first row came from the table head.
    pub fn has_header_row(&self) -> bool {
        self.rows
            .first()
            .is_some_and(|row| row.iter().any(|cell| cell.is_header))
    }
}

/// Everything one conversion call produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    pub plain_text: String,
    pub format_ranges: Vec<FormatRange>,
    pub list_item_ranges: Vec<ListItemRange>,
    pub tables: Vec<TableData>,
}

impl ConversionResult {
    /// The position one past the last character of the plain text.
    pub fn end_index(&self) -> usize {
        1 + text_len(&self.plain_text)
    }

    /// Checks the structural invariants every consumer relies on.
    pub fn validate(&self) -> Result<(), ConvertError> {
        let limit = self.end_index();
        for range in &self.format_ranges {
            if range.end < range.start {
                return Err(ConvertError::InvertedRange {
                    kind: range.kind,
                    start: range.start,
                    end: range.end,
                });
            }
            if range.end > limit {
                return Err(ConvertError::RangeOutOfBounds {
                    kind: range.kind,
                    start: range.start,
                    end: range.end,
                    limit,
                });
            }
        }
        for item in &self.list_item_ranges {
            if item.end < item.start {
                return Err(ConvertError::InvertedListItem {
                    start: item.start,
                    end: item.end,
                });
            }
        }
        for table in &self.tables {
            if table.num_cols() == 0 {
                return Err(ConvertError::EmptyTable {
                    index: table.insert_index,
                });
            }
        }
        Ok(())
    }
}
