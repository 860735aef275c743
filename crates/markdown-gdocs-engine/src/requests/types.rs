//! Edit requests in the destination's batch-update wire shape.
//!
//! Each [`Request`] serializes as a single-key object named after its
//! kind, e.g. `{"updateTextStyle": {"range": ..., "textStyle": ..., "fields": "bold"}}`.

use serde::{Deserialize, Serialize};

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbColor {
    pub const fn gray(level: f64) -> Self {
        Self {
            red: level,
            green: level,
            blue: level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub rgb_color: RgbColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionalColor {
    pub color: Color,
}

impl From<RgbColor> for OptionalColor {
    fn from(rgb_color: RgbColor) -> Self {
        Self {
            color: Color { rgb_color },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Pt,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub const fn pt(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashStyle {
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub index: usize,
}

/// A half-open `[startIndex, endIndex)` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl IndexRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulletPreset {
    BulletDiscCircleSquare,
    NumberedDecimalAlphaRoman,
}

impl BulletPreset {
    pub fn for_list(ordered: bool) -> Self {
        if ordered {
            BulletPreset::NumberedDecimalAlphaRoman
        } else {
            BulletPreset::BulletDiscCircleSquare
        }
    }
}

/// Destination paragraph styles.
///
/// Source heading level 1 is the document title; source level `n > 1`
/// maps to destination heading `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyleType {
    Title,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
}

impl NamedStyleType {
    pub fn for_heading(level: u8) -> Self {
        match level {
            0 | 1 => NamedStyleType::Title,
            2 => NamedStyleType::Heading1,
            3 => NamedStyleType::Heading2,
            4 => NamedStyleType::Heading3,
            5 => NamedStyleType::Heading4,
            _ => NamedStyleType::Heading5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFontFamily {
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
}

/// Character-level style. Only the set fields are sent, and the request's
/// field mask is derived from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_font_family: Option<WeightedFontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextStyle {
    pub fn fields(&self) -> String {
        [
            ("bold", self.bold.is_some()),
            ("italic", self.italic.is_some()),
            ("weightedFontFamily", self.weighted_font_family.is_some()),
            ("fontSize", self.font_size.is_some()),
            ("foregroundColor", self.foreground_color.is_some()),
            ("backgroundColor", self.background_color.is_some()),
            ("link", self.link.is_some()),
        ]
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphBorder {
    pub color: OptionalColor,
    pub width: Dimension,
    pub padding: Dimension,
    pub dash_style: DashStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_start: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_end: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<ParagraphBorder>,
}

impl ParagraphStyle {
    pub fn fields(&self) -> String {
        [
            ("namedStyleType", self.named_style_type.is_some()),
            ("indentStart", self.indent_start.is_some()),
            ("indentEnd", self.indent_end.is_some()),
            ("borderLeft", self.border_left.is_some()),
        ]
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellBorder {
    pub color: OptionalColor,
    pub width: Dimension,
    pub dash_style: DashStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<TableCellBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right: Option<TableCellBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<TableCellBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<TableCellBorder>,
}

impl TableCellStyle {
    pub fn fields(&self) -> String {
        [
            ("backgroundColor", self.background_color.is_some()),
            ("borderLeft", self.border_left.is_some()),
            ("borderRight", self.border_right.is_some()),
            ("borderTop", self.border_top.is_some()),
            ("borderBottom", self.border_bottom.is_some()),
        ]
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellLocation {
    pub table_start_location: Location,
    pub row_index: usize,
    pub column_index: usize,
}

/// A rectangular block of cells anchored at a table's start position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRange {
    pub table_cell_location: TableCellLocation,
    pub row_span: usize,
    pub column_span: usize,
}

/// One edit operation against the destination buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    InsertText {
        location: Location,
        text: String,
    },
    CreateParagraphBullets {
        range: IndexRange,
        bullet_preset: BulletPreset,
    },
    UpdateParagraphStyle {
        range: IndexRange,
        paragraph_style: ParagraphStyle,
        fields: String,
    },
    UpdateTextStyle {
        range: IndexRange,
        text_style: TextStyle,
        fields: String,
    },
    InsertTable {
        location: Location,
        rows: usize,
        columns: usize,
    },
    UpdateTableCellStyle {
        table_range: TableRange,
        table_cell_style: TableCellStyle,
        fields: String,
    },
}

impl Request {
    pub fn insert_text(index: usize, text: &str) -> Self {
        Request::InsertText {
            location: Location { index },
            text: text.to_string(),
        }
    }

    pub fn create_bullets(start: usize, end: usize, ordered: bool) -> Self {
        Request::CreateParagraphBullets {
            range: IndexRange::new(start, end),
            bullet_preset: BulletPreset::for_list(ordered),
        }
    }

    pub fn paragraph_style(start: usize, end: usize, style: ParagraphStyle) -> Self {
        Request::UpdateParagraphStyle {
            range: IndexRange::new(start, end),
            fields: style.fields(),
            paragraph_style: style,
        }
    }

    pub fn text_style(start: usize, end: usize, style: TextStyle) -> Self {
        Request::UpdateTextStyle {
            range: IndexRange::new(start, end),
            fields: style.fields(),
            text_style: style,
        }
    }

    pub fn insert_table(index: usize, rows: usize, columns: usize) -> Self {
        Request::InsertTable {
            location: Location { index },
            rows,
            columns,
        }
    }

    pub fn table_cell_style(range: TableRange, style: TableCellStyle) -> Self {
        Request::UpdateTableCellStyle {
            table_range: range,
            fields: style.fields(),
            table_cell_style: style,
        }
    }

    /// The wire name of this request's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Request::InsertText { .. } => "insertText",
            Request::CreateParagraphBullets { .. } => "createParagraphBullets",
            Request::UpdateParagraphStyle { .. } => "updateParagraphStyle",
            Request::UpdateTextStyle { .. } => "updateTextStyle",
            Request::InsertTable { .. } => "insertTable",
            Request::UpdateTableCellStyle { .. } => "updateTableCellStyle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn bullets_serialize_in_wire_shape() {
        let request = Request::create_bullets(1, 4, false);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "createParagraphBullets": {
                    "range": {"startIndex": 1, "endIndex": 4},
                    "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE"
                }
            })
        );
    }

    #[test]
    fn text_style_sends_only_set_fields() {
        let request = Request::text_style(
            3,
            7,
            TextStyle {
                bold: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "updateTextStyle": {
                    "range": {"startIndex": 3, "endIndex": 7},
                    "textStyle": {"bold": true},
                    "fields": "bold"
                }
            })
        );
    }

    #[test]
    fn heading_named_styles() {
        let value = |level| serde_json::to_value(NamedStyleType::for_heading(level)).unwrap();
        assert_eq!(value(1), json!("TITLE"));
        assert_eq!(value(2), json!("HEADING_1"));
        assert_eq!(value(6), json!("HEADING_5"));
    }

    #[test]
    fn dimension_serializes_with_unit() {
        assert_eq!(
            serde_json::to_value(Dimension::pt(36.0)).unwrap(),
            json!({"magnitude": 36.0, "unit": "PT"})
        );
    }

    #[test]
    fn insert_table_shape() {
        assert_eq!(
            serde_json::to_value(Request::insert_table(5, 2, 3)).unwrap(),
            json!({"insertTable": {"location": {"index": 5}, "rows": 2, "columns": 3}})
        );
    }

    #[test]
    fn field_masks_follow_set_properties() {
        let style = ParagraphStyle {
            indent_start: Some(Dimension::pt(36.0)),
            indent_end: Some(Dimension::pt(36.0)),
            ..Default::default()
        };
        assert_eq!(style.fields(), "indentStart,indentEnd");
        assert_eq!(TextStyle::default().fields(), "");
    }

    #[test]
    fn kind_matches_wire_key() {
        let request = Request::insert_text(1, "x");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get(request.kind()).is_some());
    }
}
