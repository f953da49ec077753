//! Intermediate block document that templates emit and the layout flow
//! consumes. Templates are pure functions `&ResumeData -> Vec<Block>`; nothing
//! here knows about pages or the PDF.

use serde::{Deserialize, Serialize};

use crate::layout::{FontFamily, FontStyle};

/// Semantic color slots, resolved by the renderer. `Accent` comes from the
/// document settings (the original ColorPicker value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Black,
    Muted,
    Accent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size_pt: f32,
    pub color: Color,
    pub align: Align,
}

impl TextStyle {
    pub fn new(family: FontFamily, size_pt: f32) -> Self {
        Self {
            family,
            style: FontStyle::Regular,
            size_pt,
            color: Color::Black,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.style = FontStyle::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A run of text, word-wrapped to the available width.
    Text { text: String, style: TextStyle },
    /// Left and right text on the same line (item header + date range).
    /// Neither side wraps; the right side is right-aligned.
    KeyLine {
        left: String,
        right: String,
        left_style: TextStyle,
        right_style: TextStyle,
    },
    /// A bulleted list with hanging indent.
    Bullets { items: Vec<String>, style: TextStyle },
    /// Full-width horizontal rule.
    Rule { color: Color, thickness_pt: f32 },
    /// Full-width filled band (decorative header backgrounds).
    Band { height_pt: f32, color: Color },
    Spacer { height_pt: f32 },
    /// Two independent columns; the flow advances by the taller one.
    Columns {
        left: Vec<Block>,
        right: Vec<Block>,
        left_frac: f32,
        gutter_pt: f32,
    },
}

impl Block {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Block::Text {
            text: text.into(),
            style,
        }
    }

    pub fn spacer(height_pt: f32) -> Self {
        Block::Spacer { height_pt }
    }
}
