//! # Token Stream
//!
//! The walker consumes a flat stream of open/close block tokens with inline
//! runs grouped into single [`Token::Inline`] nodes. This module adapts
//! `pulldown-cmark`'s event stream to that shape:
//!
//! - consecutive inline events collapse into one `Inline` token
//! - tight list items get a synthetic paragraph around their text
//! - table head cells get a synthetic row, body rows a `Tbody` wrapper
//! - code blocks collapse into one token carrying their raw content
//! - image alt text is dropped; the image itself is an `Other` child

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// A block-level token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    HeadingOpen { level: u8 },
    HeadingClose,
    ParagraphOpen,
    ParagraphClose,
    BulletListOpen,
    BulletListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    BlockquoteOpen,
    BlockquoteClose,
    CodeBlock { content: String },
    Rule,
    TableOpen,
    TableClose,
    TheadOpen,
    TheadClose,
    TbodyOpen,
    TbodyClose,
    RowOpen,
    RowClose,
    CellOpen { header: bool },
    CellClose,
    Inline(Vec<InlineToken>),
    Other,
}

impl Token {
    /// Whether this token opens a block that a later token closes.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            Token::HeadingOpen { .. }
                | Token::ParagraphOpen
                | Token::BulletListOpen
                | Token::OrderedListOpen
                | Token::ListItemOpen
                | Token::BlockquoteOpen
                | Token::TableOpen
                | Token::TheadOpen
                | Token::TbodyOpen
                | Token::RowOpen
                | Token::CellOpen { .. }
        )
    }

    /// Whether this token closes a block.
    pub fn is_close(&self) -> bool {
        matches!(
            self,
            Token::HeadingClose
                | Token::ParagraphClose
                | Token::BulletListClose
                | Token::OrderedListClose
                | Token::ListItemClose
                | Token::BlockquoteClose
                | Token::TableClose
                | Token::TheadClose
                | Token::TbodyClose
                | Token::RowClose
                | Token::CellClose
        )
    }
}

/// A child of an inline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    Text(String),
    StrongOpen,
    StrongClose,
    EmOpen,
    EmClose,
    LinkOpen { href: String },
    LinkClose,
    Code(String),
    SoftBreak,
    HardBreak,
    Other,
}

/// Tokenizes `markdown` with tables enabled.
///
/// Task list markers are left as literal text; the walker strips them.
pub fn tokenize(markdown: &str) -> Vec<Token> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let mut builder = TokenBuilder::default();
    for event in Parser::new_ext(markdown, options) {
        builder.push(event);
    }
    builder.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Item,
    TableHead,
    Block,
}

#[derive(Default)]
struct TokenBuilder {
    out: Vec<Token>,
    inline: Vec<InlineToken>,
    frames: Vec<Frame>,
    code: Option<String>,
    image_depth: usize,
    in_body: bool,
}

impl TokenBuilder {
    fn push(&mut self, event: Event<'_>) {
        if self.image_depth > 0 {
            match event {
                Event::Start(Tag::Image { .. }) => self.image_depth += 1,
                Event::End(TagEnd::Image) => self.image_depth -= 1,
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => match self.code.as_mut() {
                Some(code) => code.push_str(&text),
                None => self.inline.push(InlineToken::Text(text.into_string())),
            },
            Event::Code(code) => self.inline.push(InlineToken::Code(code.into_string())),
            Event::SoftBreak => self.inline.push(InlineToken::SoftBreak),
            Event::HardBreak => self.inline.push(InlineToken::HardBreak),
            Event::Rule => {
                self.flush_inline();
                self.out.push(Token::Rule);
            }
            // Block-level HTML carries no text the destination can use.
            Event::Html(_) => {}
            _ => self.inline.push(InlineToken::Other),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Emphasis => self.inline.push(InlineToken::EmOpen),
            Tag::Strong => self.inline.push(InlineToken::StrongOpen),
            Tag::Link { dest_url, .. } => self.inline.push(InlineToken::LinkOpen {
                href: dest_url.into_string(),
            }),
            Tag::Image { .. } => {
                self.inline.push(InlineToken::Other);
                self.image_depth = 1;
            }
            Tag::Paragraph => self.open_block(Frame::Block, Token::ParagraphOpen),
            Tag::Heading { level, .. } => self.open_block(
                Frame::Block,
                Token::HeadingOpen {
                    level: level as u8,
                },
            ),
            Tag::BlockQuote(_) => self.open_block(Frame::Block, Token::BlockquoteOpen),
            Tag::CodeBlock(_) => {
                self.flush_inline();
                self.frames.push(Frame::Block);
                self.code = Some(String::new());
            }
            Tag::List(start) => {
                let token = if start.is_some() {
                    Token::OrderedListOpen
                } else {
                    Token::BulletListOpen
                };
                self.open_block(Frame::Block, token);
            }
            Tag::Item => self.open_block(Frame::Item, Token::ListItemOpen),
            Tag::Table(_) => {
                self.in_body = false;
                self.open_block(Frame::Block, Token::TableOpen);
            }
            Tag::TableHead => {
                self.open_block(Frame::TableHead, Token::TheadOpen);
                self.out.push(Token::RowOpen);
            }
            Tag::TableRow => {
                self.flush_inline();
                if !self.in_body {
                    self.out.push(Token::TbodyOpen);
                    self.in_body = true;
                }
                self.frames.push(Frame::Block);
                self.out.push(Token::RowOpen);
            }
            Tag::TableCell => {
                let header = self.frames.last() == Some(&Frame::TableHead);
                self.open_block(Frame::Block, Token::CellOpen { header });
            }
            // Unknown containers are transparent: their children still flow.
            _ => {
                self.flush_inline();
                self.frames.push(Frame::Block);
            }
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Emphasis => self.inline.push(InlineToken::EmClose),
            TagEnd::Strong => self.inline.push(InlineToken::StrongClose),
            TagEnd::Link => self.inline.push(InlineToken::LinkClose),
            TagEnd::Paragraph => self.close_block(Token::ParagraphClose),
            TagEnd::Heading(_) => self.close_block(Token::HeadingClose),
            TagEnd::BlockQuote(_) => self.close_block(Token::BlockquoteClose),
            TagEnd::CodeBlock => {
                self.frames.pop();
                let content = self.code.take().unwrap_or_default();
                self.out.push(Token::CodeBlock { content });
            }
            TagEnd::List(ordered) => self.close_block(if ordered {
                Token::OrderedListClose
            } else {
                Token::BulletListClose
            }),
            TagEnd::Item => self.close_block(Token::ListItemClose),
            TagEnd::TableHead => {
                self.close_block(Token::RowClose);
                self.out.push(Token::TheadClose);
            }
            TagEnd::TableRow => self.close_block(Token::RowClose),
            TagEnd::TableCell => self.close_block(Token::CellClose),
            TagEnd::Table => {
                self.flush_inline();
                self.frames.pop();
                if self.in_body {
                    self.out.push(Token::TbodyClose);
                    self.in_body = false;
                }
                self.out.push(Token::TableClose);
            }
            _ => {
                self.flush_inline();
                self.frames.pop();
            }
        }
    }

    fn open_block(&mut self, frame: Frame, token: Token) {
        self.flush_inline();
        self.frames.push(frame);
        self.out.push(token);
    }

    fn close_block(&mut self, token: Token) {
        self.flush_inline();
        self.frames.pop();
        self.out.push(token);
    }

    /// Emits pending inline children as one `Inline` token.
    ///
    /// Text sitting directly in a list item (a tight list) is wrapped in a
    /// paragraph so items look the same whether tight or loose.
    fn flush_inline(&mut self) {
        if self.inline.is_empty() {
            return;
        }
        let children = std::mem::take(&mut self.inline);
        if self.frames.last() == Some(&Frame::Item) {
            self.out.push(Token::ParagraphOpen);
            self.out.push(Token::Inline(children));
            self.out.push(Token::ParagraphClose);
        } else {
            self.out.push(Token::Inline(children));
        }
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_inline();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineToken {
        InlineToken::Text(s.to_string())
    }

    #[test]
    fn heading_with_inline_run() {
        assert_eq!(
            tokenize("# Title\n"),
            vec![
                Token::HeadingOpen { level: 1 },
                Token::Inline(vec![text("Title")]),
                Token::HeadingClose,
            ]
        );
    }

    #[test]
    fn strong_and_link_markers() {
        assert_eq!(
            tokenize("**bold** and [site](https://example.com)"),
            vec![
                Token::ParagraphOpen,
                Token::Inline(vec![
                    InlineToken::StrongOpen,
                    text("bold"),
                    InlineToken::StrongClose,
                    text(" and "),
                    InlineToken::LinkOpen {
                        href: "https://example.com".into()
                    },
                    text("site"),
                    InlineToken::LinkClose,
                ]),
                Token::ParagraphClose,
            ]
        );
    }

    #[test]
    fn tight_list_items_get_paragraphs() {
        assert_eq!(
            tokenize("- a\n  - b\n"),
            vec![
                Token::BulletListOpen,
                Token::ListItemOpen,
                Token::ParagraphOpen,
                Token::Inline(vec![text("a")]),
                Token::ParagraphClose,
                Token::BulletListOpen,
                Token::ListItemOpen,
                Token::ParagraphOpen,
                Token::Inline(vec![text("b")]),
                Token::ParagraphClose,
                Token::ListItemClose,
                Token::BulletListClose,
                Token::ListItemClose,
                Token::BulletListClose,
            ]
        );
    }

    #[test]
    fn ordered_list_tokens() {
        let tokens = tokenize("1. one\n");
        assert_eq!(tokens.first(), Some(&Token::OrderedListOpen));
        assert_eq!(tokens.last(), Some(&Token::OrderedListClose));
    }

    #[test]
    fn fenced_code_keeps_raw_content() {
        assert_eq!(
            tokenize("```rust\nlet x = 1;\n```\n"),
            vec![Token::CodeBlock {
                content: "let x = 1;\n".into()
            }]
        );
    }

    #[test]
    fn table_has_head_row_and_body() {
        let tokens = tokenize("| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert_eq!(
            tokens,
            vec![
                Token::TableOpen,
                Token::TheadOpen,
                Token::RowOpen,
                Token::CellOpen { header: true },
                Token::Inline(vec![text("A")]),
                Token::CellClose,
                Token::CellOpen { header: true },
                Token::Inline(vec![text("B")]),
                Token::CellClose,
                Token::RowClose,
                Token::TheadClose,
                Token::TbodyOpen,
                Token::RowOpen,
                Token::CellOpen { header: false },
                Token::Inline(vec![text("1")]),
                Token::CellClose,
                Token::CellOpen { header: false },
                Token::Inline(vec![text("2")]),
                Token::CellClose,
                Token::RowClose,
                Token::TbodyClose,
                Token::TableClose,
            ]
        );
    }

    #[test]
    fn image_alt_text_is_dropped() {
        assert_eq!(
            tokenize("see ![alt text](pic.png) here"),
            vec![
                Token::ParagraphOpen,
                Token::Inline(vec![text("see "), InlineToken::Other, text(" here")]),
                Token::ParagraphClose,
            ]
        );
    }

    #[test]
    fn rule_between_paragraphs() {
        let tokens = tokenize("a\n\n---\n\nb\n");
        assert_eq!(tokens[3], Token::Rule);
    }

    #[test]
    fn open_and_close_are_disjoint() {
        for token in tokenize("> # q\n\n- a\n\n| x |\n|---|\n| y |\n") {
            assert!(!(token.is_open() && token.is_close()), "{token:?}");
        }
    }
}
