//! # Inline Run Extractor
//!
//! Flattens one inline run into plain text plus flat format ranges.
//!
//! A `strong`/`em`/`link` span contributes only the plain text found
//! between its markers; markers nested inside it are folded into that text
//! and get no range of their own. Inline code is one range over its
//! literal content. Line breaks become a single `\n`.

use crate::model::{FormatKind, FormatRange};
use crate::text::text_len;
use crate::token::InlineToken;

/// The span kinds that scan forward to a matching close marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Strong,
    Em,
    Link,
}

impl Span {
    fn opened_by(token: &InlineToken) -> Option<Self> {
        match token {
            InlineToken::StrongOpen => Some(Span::Strong),
            InlineToken::EmOpen => Some(Span::Em),
            InlineToken::LinkOpen { .. } => Some(Span::Link),
            _ => None,
        }
    }

    fn closed_by(token: &InlineToken) -> Option<Self> {
        match token {
            InlineToken::StrongClose => Some(Span::Strong),
            InlineToken::EmClose => Some(Span::Em),
            InlineToken::LinkClose => Some(Span::Link),
            _ => None,
        }
    }
}

/// Extracts the plain text of `children`, appending a range to `ranges`
/// for every span found.
///
/// `cursor` is the buffer position the returned text will start at. The
/// caller appends the text and advances its own cursor by its length.
pub fn extract_inline(
    children: &[InlineToken],
    cursor: usize,
    ranges: &mut Vec<FormatRange>,
) -> String {
    let mut text = String::new();
    let mut len = 0;
    let mut i = 0;

    while i < children.len() {
        let child = &children[i];
        let at = cursor + len;

        if let Some(span) = Span::opened_by(child) {
            let (span_text, consumed) = span_text(children, i, span);
            let span_len = text_len(&span_text);
            let end = at + span_len;
            let range = match (span, child) {
                (Span::Strong, _) => FormatRange::new(FormatKind::Bold, at, end),
                (Span::Em, _) => FormatRange::new(FormatKind::Italic, at, end),
                (Span::Link, InlineToken::LinkOpen { href }) => {
                    FormatRange::link(at, end, href, &span_text)
                }
                (Span::Link, _) => FormatRange::link(at, end, "", &span_text),
            };
            ranges.push(range.with_text(&span_text));
            text.push_str(&span_text);
            len += span_len;
            i += consumed;
            continue;
        }

        match child {
            InlineToken::Text(content) => {
                text.push_str(content);
                len += text_len(content);
            }
            InlineToken::Code(content) => {
                let end = at + text_len(content);
                ranges.push(FormatRange::new(FormatKind::CodeInline, at, end).with_text(content));
                text.push_str(content);
                len = end - cursor;
            }
            InlineToken::SoftBreak | InlineToken::HardBreak => {
                text.push('\n');
                len += 1;
            }
            InlineToken::StrongClose | InlineToken::EmClose | InlineToken::LinkClose => {
                log::warn!("unbalanced inline close marker {child:?} ignored");
            }
            _ => {}
        }
        i += 1;
    }

    text
}

/// Returns the plain text of `children` with all styling dropped.
pub fn plain_text(children: &[InlineToken]) -> String {
    let mut scratch = Vec::new();
    extract_inline(children, 1, &mut scratch)
}

/// Collects the text descendants between the opener at `open` and its
/// matching close, returning the text and the number of tokens consumed
/// (opener and closer included).
///
/// Running out of siblings acts as an implicit close.
fn span_text(children: &[InlineToken], open: usize, span: Span) -> (String, usize) {
    let mut text = String::new();
    let mut depth = 1usize;
    let mut i = open + 1;

    while let Some(child) = children.get(i) {
        if Span::opened_by(child) == Some(span) {
            depth += 1;
        } else if Span::closed_by(child) == Some(span) {
            depth -= 1;
            if depth == 0 {
                return (text, i - open + 1);
            }
        } else if let InlineToken::Text(content) = child {
            text.push_str(content);
        }
        i += 1;
    }

    log::warn!("unterminated {span:?} span closed at end of inline run");
    (text, i - open)
}
