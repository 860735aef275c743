use serde::{Deserialize, Serialize};

use super::types::{
    DashStyle, Dimension, Link, NamedStyleType, ParagraphBorder, ParagraphStyle, RgbColor,
    TableCellBorder, TableCellStyle, TextStyle, WeightedFontFamily,
};

/// Visual constants for every styled construct.
///
/// The defaults are the house style; a config file may override any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub inline_code_font_size: f64,
    pub code_font_family: String,
    pub code_font_size: f64,
    pub code_background: RgbColor,
    pub code_indent: f64,
    pub quote_indent: f64,
    pub quote_border_color: RgbColor,
    pub quote_border_width: f64,
    pub quote_border_padding: f64,
    pub quote_background: RgbColor,
    pub table_border_color: RgbColor,
    pub table_border_width: f64,
    pub header_background: RgbColor,
    pub header_text_color: RgbColor,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            inline_code_font_size: 10.0,
            code_font_family: "Courier New".to_string(),
            code_font_size: 10.0,
            code_background: RgbColor::gray(0.95),
            code_indent: 36.0,
            quote_indent: 36.0,
            quote_border_color: RgbColor::gray(0.6),
            quote_border_width: 3.0,
            quote_border_padding: 10.0,
            quote_background: RgbColor::gray(0.98),
            table_border_color: RgbColor::gray(0.8),
            table_border_width: 1.0,
            header_background: RgbColor::gray(0.9),
            header_text_color: RgbColor::gray(0.2),
        }
    }
}

impl StyleSheet {
    pub fn heading(&self, level: u8) -> ParagraphStyle {
        ParagraphStyle {
            named_style_type: Some(NamedStyleType::for_heading(level)),
            ..Default::default()
        }
    }

    pub fn bold(&self) -> TextStyle {
        TextStyle {
            bold: Some(true),
            ..Default::default()
        }
    }

    pub fn italic(&self) -> TextStyle {
        TextStyle {
            italic: Some(true),
            ..Default::default()
        }
    }

    /// Inline code only shrinks; the font family is left alone.
    pub fn inline_code(&self) -> TextStyle {
        TextStyle {
            font_size: Some(Dimension::pt(self.inline_code_font_size)),
            ..Default::default()
        }
    }

    pub fn link(&self, url: &str) -> TextStyle {
        TextStyle {
            link: Some(Link {
                url: url.to_string(),
            }),
            ..Default::default()
        }
    }

    pub fn code_block_text(&self) -> TextStyle {
        TextStyle {
            weighted_font_family: Some(WeightedFontFamily {
                font_family: self.code_font_family.clone(),
            }),
            font_size: Some(Dimension::pt(self.code_font_size)),
            background_color: Some(self.code_background.into()),
            ..Default::default()
        }
    }

    pub fn code_block_paragraph(&self) -> ParagraphStyle {
        ParagraphStyle {
            indent_start: Some(Dimension::pt(self.code_indent)),
            indent_end: Some(Dimension::pt(self.code_indent)),
            ..Default::default()
        }
    }

    pub fn blockquote_paragraph(&self) -> ParagraphStyle {
        ParagraphStyle {
            indent_start: Some(Dimension::pt(self.quote_indent)),
            border_left: Some(ParagraphBorder {
                color: self.quote_border_color.into(),
                width: Dimension::pt(self.quote_border_width),
                padding: Dimension::pt(self.quote_border_padding),
                dash_style: DashStyle::Solid,
            }),
            ..Default::default()
        }
    }

    pub fn blockquote_text(&self) -> TextStyle {
        TextStyle {
            background_color: Some(self.quote_background.into()),
            ..Default::default()
        }
    }

    pub fn table_borders(&self) -> TableCellStyle {
        let border = TableCellBorder {
            color: self.table_border_color.into(),
            width: Dimension::pt(self.table_border_width),
            dash_style: DashStyle::Solid,
        };
        TableCellStyle {
            border_left: Some(border),
            border_right: Some(border),
            border_top: Some(border),
            border_bottom: Some(border),
            ..Default::default()
        }
    }

    pub fn header_cells(&self) -> TableCellStyle {
        TableCellStyle {
            background_color: Some(self.header_background.into()),
            ..Default::default()
        }
    }

    pub fn header_text(&self) -> TextStyle {
        TextStyle {
            bold: Some(true),
            foreground_color: Some(self.header_text_color.into()),
            ..Default::default()
        }
    }
}
