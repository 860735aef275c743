//! # Markdown to Plain Text Conversion
//!
//! One top-to-bottom walk over a token stream builds a plain-text buffer
//! and the ranges that describe how to style it.
//!
//! ## Modules
//!
//! - **`cursor`**: `TokenCursor` for recursive-descent walking over tokens
//! - **`inline`**: the inline run extractor (bold, italic, code, links, breaks)
//! - **`blocks`**: block handlers (headings, paragraphs, lists, quotes,
//!   code blocks, rules, tables)
//!
//! All state lives in an [`Accumulator`] owned by a single call, so
//! conversions share nothing and may run in parallel.

pub mod blocks;
pub mod cursor;
pub mod inline;

use crate::error::ConvertError;
use crate::front_matter::strip_front_matter;
use crate::model::{ConversionResult, FormatRange, ListItemRange, TableData};
use crate::text::text_len;
use crate::token::{InlineToken, Token, tokenize};

use cursor::TokenCursor;

/// Literal appended for a horizontal rule.
pub const RULE_TEXT: &str = "---\n";
/// Positions a horizontal rule occupies. Fixed, not derived from
/// [`RULE_TEXT`].
pub const RULE_WIDTH: usize = 4;

/// The growing plain-text buffer and every record collected so far.
///
/// `cursor` is always `1 + text_len(text)`: the position the next appended
/// character will occupy.
#[derive(Debug)]
pub struct Accumulator {
    text: String,
    cursor: usize,
    format_ranges: Vec<FormatRange>,
    list_item_ranges: Vec<ListItemRange>,
    tables: Vec<TableData>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 1,
            format_ranges: Vec::new(),
            list_item_ranges: Vec::new(),
            tables: Vec::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.cursor += text_len(s);
    }

    pub fn push_rule(&mut self) {
        self.text.push_str(RULE_TEXT);
        self.cursor += RULE_WIDTH;
    }

    pub fn push_format(&mut self, range: FormatRange) {
        self.format_ranges.push(range);
    }

    pub fn push_list_item(&mut self, item: ListItemRange) {
        self.list_item_ranges.push(item);
    }

    pub fn push_table(&mut self, table: TableData) {
        self.tables.push(table);
    }

    /// Extracts an inline run at the cursor, records its ranges, and
    /// appends its text.
    pub fn push_inline(&mut self, children: &[InlineToken]) -> String {
        let text = inline::extract_inline(children, self.cursor, &mut self.format_ranges);
        self.push_str(&text);
        text
    }

    /// Checks the cursor invariant and the recorded ranges, then hands
    /// everything over as a [`ConversionResult`].
    pub fn finish(self) -> Result<ConversionResult, ConvertError> {
        let expected = 1 + text_len(&self.text);
        if self.cursor != expected {
            return Err(ConvertError::CursorMismatch {
                cursor: self.cursor,
                expected,
            });
        }
        let result = ConversionResult {
            plain_text: self.text,
            format_ranges: self.format_ranges,
            list_item_ranges: self.list_item_ranges,
            tables: self.tables,
        };
        result.validate()?;
        Ok(result)
    }
}

/// Converts markdown (with optional front matter) into plain text and
/// format records.
pub fn convert(markdown: &str) -> Result<ConversionResult, ConvertError> {
    let tokens = tokenize(strip_front_matter(markdown));
    convert_tokens(&tokens)
}

/// Converts an already tokenized document.
pub fn convert_tokens(tokens: &[Token]) -> Result<ConversionResult, ConvertError> {
    let mut acc = Accumulator::new();
    let mut cur = TokenCursor::new(tokens);
    blocks::walk(&mut cur, &mut acc);
    let result = acc.finish()?;
    log::debug!(
        "converted {} tokens: {} positions, {} format ranges, {} list items, {} tables",
        tokens.len(),
        text_len(&result.plain_text),
        result.format_ranges.len(),
        result.list_item_ranges.len(),
        result.tables.len()
    );
    Ok(result)
}
