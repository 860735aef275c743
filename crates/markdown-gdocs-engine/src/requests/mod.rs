//! # Request Generator
//!
//! Turns a [`ConversionResult`] into an ordered list of edit requests.
//!
//! Order matters. Requests are applied one after another against a buffer
//! that already holds the plain text, and each one may shift positions:
//!
//! 1. **Lists** are bulletized first. Bulletizing removes the leading tabs
//!    that encode nesting, so later groups are shifted by a running count.
//! 2. **Format ranges** follow in encounter order, each shifted by the tabs
//!    that precede it in the untransformed text.
//! 3. **Tables** go last, the last table first, so inserting one never
//!    moves a table still waiting to be built.

pub mod lists;
pub mod style;
pub mod tables;
pub mod types;

use serde::Serialize;

use crate::error::ConvertError;
use crate::model::{ConversionResult, FormatKind, FormatRange};
use crate::text::TabIndex;

pub use style::StyleSheet;
pub use types::Request;

/// Builds edit requests with a fixed [`StyleSheet`].
#[derive(Debug, Clone, Default)]
pub struct RequestGenerator {
    styles: StyleSheet,
}

impl RequestGenerator {
    pub fn new(styles: StyleSheet) -> Self {
        Self { styles }
    }

    /// Generates the requests for `result`, validating it first.
    ///
    /// The plain text itself is not inserted here; see [`DocumentPlan`].
    pub fn generate(&self, result: &ConversionResult) -> Result<Vec<Request>, ConvertError> {
        result.validate()?;

        let text = result.plain_text.as_str();
        let mut requests = lists::bullet_requests(text, &result.list_item_ranges);

        let tabs = TabIndex::new(text);
        for range in &result.format_ranges {
            let shift = tabs.before(range.start);
            let (start, end) = (range.start - shift, range.end - shift);
            if start == end {
                log::debug!("skipping empty {:?} range at {start}", range.kind);
                continue;
            }
            self.format_requests(range, start, end, &mut requests);
        }

        for table in result.tables.iter().rev() {
            requests.extend(tables::table_requests(text, table, &self.styles));
        }

        log::debug!(
            "generated {} requests from {} list items, {} format ranges, {} tables",
            requests.len(),
            result.list_item_ranges.len(),
            result.format_ranges.len(),
            result.tables.len()
        );
        Ok(requests)
    }

    fn format_requests(
        &self,
        range: &FormatRange,
        start: usize,
        end: usize,
        out: &mut Vec<Request>,
    ) {
        let styles = &self.styles;
        match range.kind {
            FormatKind::Heading => {
                let level = range.level.unwrap_or(1);
                out.push(Request::paragraph_style(start, end, styles.heading(level)));
            }
            FormatKind::Bold => out.push(Request::text_style(start, end, styles.bold())),
            FormatKind::Italic => out.push(Request::text_style(start, end, styles.italic())),
            FormatKind::CodeInline => {
                out.push(Request::text_style(start, end, styles.inline_code()));
            }
            FormatKind::Link => {
                let url = range.url.as_deref().unwrap_or_default();
                out.push(Request::text_style(start, end, styles.link(url)));
            }
            FormatKind::CodeBlock => {
                out.push(Request::text_style(start, end, styles.code_block_text()));
                out.push(Request::paragraph_style(
                    start,
                    end,
                    styles.code_block_paragraph(),
                ));
            }
            FormatKind::Blockquote => {
                out.push(Request::paragraph_style(
                    start,
                    end,
                    styles.blockquote_paragraph(),
                ));
                out.push(Request::text_style(start, end, styles.blockquote_text()));
            }
        }
    }
}

/// Generates requests with the default style sheet.
pub fn generate_requests(result: &ConversionResult) -> Result<Vec<Request>, ConvertError> {
    RequestGenerator::default().generate(result)
}

/// The plain text and the requests that style it, ready for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPlan {
    pub plain_text: String,
    pub requests: Vec<Request>,
}

/// Body of one batch-update call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchUpdate {
    pub requests: Vec<Request>,
}

impl DocumentPlan {
    pub fn new(
        result: &ConversionResult,
        generator: &RequestGenerator,
    ) -> Result<Self, ConvertError> {
        Ok(Self {
            plain_text: result.plain_text.clone(),
            requests: generator.generate(result)?,
        })
    }

    /// All requests in application order, starting with the text insertion
    /// at index 1. Empty text inserts nothing.
    pub fn batch(&self) -> BatchUpdate {
        let mut requests = Vec::with_capacity(self.requests.len() + 1);
        if !self.plain_text.is_empty() {
            requests.push(Request::insert_text(1, &self.plain_text));
        }
        requests.extend(self.requests.iter().cloned());
        BatchUpdate { requests }
    }
}
