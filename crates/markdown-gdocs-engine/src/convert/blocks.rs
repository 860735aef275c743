//! # Block Walker
//!
//! Recursive descent over block tokens. Every handler consumes exactly the
//! tokens of its block and advances the accumulator's cursor by exactly the
//! characters it appends.

use std::sync::OnceLock;

use regex::Regex;

use super::Accumulator;
use super::cursor::TokenCursor;
use super::inline;
use crate::model::{FormatKind, FormatRange, ListItemRange, TableCell, TableData};
use crate::text::text_len;
use crate::token::{InlineToken, Token};

/// Walks blocks until the tokens run out.
pub fn walk(cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    while let Some(token) = cur.bump() {
        block(token, cur, acc);
    }
}

/// Walks blocks until `close` is consumed.
fn walk_until(cur: &mut TokenCursor<'_>, acc: &mut Accumulator, close: &Token) {
    while let Some(token) = cur.bump() {
        if token == close {
            return;
        }
        block(token, cur, acc);
    }
}

fn block(token: &Token, cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    match token {
        Token::HeadingOpen { level } => heading(*level, cur, acc),
        Token::ParagraphOpen => paragraph(cur, acc),
        Token::BulletListOpen => list(false, 0, cur, acc),
        Token::OrderedListOpen => list(true, 0, cur, acc),
        Token::BlockquoteOpen => blockquote(cur, acc),
        Token::CodeBlock { content } => code_block(content, acc),
        Token::Rule => acc.push_rule(),
        Token::TableOpen => table(cur, acc),
        t if t.is_open() => {
            log::debug!("skipping {t:?} outside its container");
            cur.skip_block();
        }
        t if t.is_close() => log::warn!("unbalanced {t:?} ignored"),
        _ => {}
    }
}

/// Appends every inline run up to `close` and returns the combined text.
fn inline_content(cur: &mut TokenCursor<'_>, acc: &mut Accumulator, close: &Token) -> String {
    let mut text = String::new();
    while let Some(token) = cur.bump() {
        match token {
            t if t == close => break,
            Token::Inline(children) => text.push_str(&acc.push_inline(children)),
            t if t.is_open() => cur.skip_block(),
            _ => {}
        }
    }
    text
}

fn heading(level: u8, cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    let start = acc.cursor();
    let text = inline_content(cur, acc, &Token::HeadingClose);
    let end = acc.cursor();
    acc.push_str("\n");
    acc.push_format(FormatRange::heading(start, end, level, text.trim()));
}

fn paragraph(cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    inline_content(cur, acc, &Token::ParagraphClose);
    acc.push_str("\n");
}

fn blockquote(cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    let start = acc.cursor();
    walk_until(cur, acc, &Token::BlockquoteClose);
    let end = acc.cursor();
    acc.push_format(FormatRange::new(FormatKind::Blockquote, start, end));
}

fn code_block(content: &str, acc: &mut Accumulator) {
    let start = acc.cursor();
    acc.push_str(content);
    let end = acc.cursor();
    acc.push_str("\n");
    acc.push_format(FormatRange::new(FormatKind::CodeBlock, start, end).with_text(content));
}

fn list(ordered: bool, nesting_level: usize, cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    while let Some(token) = cur.bump() {
        match token {
            Token::BulletListClose | Token::OrderedListClose => return,
            Token::ListItemOpen => list_item(ordered, nesting_level, cur, acc),
            t if t.is_open() => cur.skip_block(),
            _ => {}
        }
    }
}

/// A list item whose text may not have been terminated yet.
struct PendingItem {
    start: usize,
    ordered: bool,
    nesting_level: usize,
    has_content: bool,
}

impl PendingItem {
    /// Terminates pending content with `\n` and records the item.
    fn commit(&mut self, acc: &mut Accumulator) {
        if !self.has_content {
            return;
        }
        acc.push_str("\n");
        acc.push_list_item(ListItemRange {
            start: self.start,
            end: acc.cursor(),
            ordered: self.ordered,
            nesting_level: self.nesting_level,
        });
        self.has_content = false;
    }
}

fn list_item(ordered: bool, nesting_level: usize, cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    // The tabs belong to the item: the destination reads nesting from them.
    let mut item = PendingItem {
        start: acc.cursor(),
        ordered,
        nesting_level,
        has_content: false,
    };
    acc.push_str(&"\t".repeat(nesting_level));

    while let Some(token) = cur.bump() {
        match token {
            Token::ListItemClose => break,
            Token::ParagraphOpen => item_paragraph(&mut item, cur, acc),
            Token::BulletListOpen | Token::OrderedListOpen => {
                item.commit(acc);
                let nested_ordered = matches!(token, Token::OrderedListOpen);
                list(nested_ordered, nesting_level + 1, cur, acc);
            }
            t if t.is_open() => cur.skip_block(),
            _ => {}
        }
    }
    item.commit(acc);
}

fn item_paragraph(item: &mut PendingItem, cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    while let Some(token) = cur.bump() {
        match token {
            Token::ParagraphClose => return,
            Token::Inline(children) => {
                if item_text(children, acc) {
                    item.has_content = true;
                }
            }
            t if t.is_open() => cur.skip_block(),
            _ => {}
        }
    }
}

/// Appends an item's inline run with any leading checkbox removed.
///
/// Returns false, appending nothing, when the text is blank.
fn item_text(children: &[InlineToken], acc: &mut Accumulator) -> bool {
    let cursor = acc.cursor();
    let mut ranges = Vec::new();
    let rendered = inline::extract_inline(children, cursor, &mut ranges);
    let stripped = strip_checkbox(&rendered);
    if stripped.trim().is_empty() {
        return false;
    }

    let shift = text_len(&rendered[..rendered.len() - stripped.len()]);
    for mut range in ranges {
        range.start = range.start.saturating_sub(shift).max(cursor);
        range.end = range.end.saturating_sub(shift).max(cursor);
        acc.push_format(range);
    }
    acc.push_str(stripped);
    true
}

fn checkbox_regex() -> &'static Regex {
    static CHECKBOX: OnceLock<Regex> = OnceLock::new();
    CHECKBOX.get_or_init(|| Regex::new(r"^\s*\[\s*[xX ]?\s*\]\s*").expect("Invalid checkbox regex"))
}

/// Removes a leading `[ ]` / `[x]` marker and the whitespace around it.
fn strip_checkbox(text: &str) -> &str {
    match checkbox_regex().find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

fn table(cur: &mut TokenCursor<'_>, acc: &mut Accumulator) {
    let insert_index = acc.cursor();
    let mut rows = Vec::new();
    let mut row = Vec::new();

    while let Some(token) = cur.bump() {
        match token {
            Token::TableClose => break,
            Token::RowOpen => row.clear(),
            Token::RowClose => rows.push(std::mem::take(&mut row)),
            Token::CellOpen { header } => row.push(TableCell {
                content: cell_text(cur),
                is_header: *header,
            }),
            _ => {}
        }
    }

    if rows.is_empty() {
        return;
    }
    acc.push_table(TableData { insert_index, rows });
    // Cell text is inserted later as structure; one placeholder holds the spot.
    acc.push_str("\n");
}

fn cell_text(cur: &mut TokenCursor<'_>) -> String {
    let mut text = String::new();
    while let Some(token) = cur.bump() {
        match token {
            Token::CellClose => break,
            Token::Inline(children) => text.push_str(&inline::plain_text(children)),
            t if t.is_open() => cur.skip_block(),
            _ => {}
        }
    }
    text
}
