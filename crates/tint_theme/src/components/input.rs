//! Input component theme schema.
//!
//! Apps reshape the look of text inputs (box, underline, ...) through
//! `components.input`. Every attribute is optional; the input widget reads
//! the accessor methods, which apply the documented fallbacks.

use super::Overlay;
use crate::tokens::FontWeight;
use serde::{Deserialize, Serialize};
use tint_core::Color;

/// Overridable input styling attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputTheme {
    /// Container corner radius (fallback: radius `md`, 8)
    pub border_radius: Option<f32>,
    /// Border width (fallback: 1). Underline styles set 0 and use
    /// `border_bottom_width` instead.
    pub border_width: Option<f32>,
    /// Bottom-only border width (fallback: 0)
    pub border_bottom_width: Option<f32>,
    /// Container background. No fallback here: an unset background means
    /// the widget uses the theme's `surface` color.
    pub background: Option<Color>,
    /// Horizontal container padding (fallback: spacing `md`, 12)
    pub padding_horizontal: Option<f32>,
    /// Vertical text padding (fallback: spacing `md`, 12)
    pub padding_vertical: Option<f32>,
    /// Label font size (fallback: 14)
    pub label_font_size: Option<f32>,
    /// Label weight (fallback: medium)
    pub label_font_weight: Option<FontWeight>,
    /// Helper/error font size (fallback: 12)
    pub helper_font_size: Option<f32>,
    /// Entry text font size (fallback: 16)
    pub input_font_size: Option<f32>,
}

impl InputTheme {
    /// The built-in "box" preset: full border, rounded corners.
    pub fn boxed() -> Self {
        Self {
            border_radius: Some(8.0),
            border_width: Some(1.0),
            padding_horizontal: Some(12.0),
            padding_vertical: Some(12.0),
            label_font_size: Some(14.0),
            label_font_weight: Some(FontWeight::Medium),
            helper_font_size: Some(12.0),
            input_font_size: Some(16.0),
            ..Self::default()
        }
    }

    /// The "underline" preset: bottom border only, transparent background.
    pub fn underline() -> Self {
        Self {
            border_radius: Some(0.0),
            border_width: Some(0.0),
            border_bottom_width: Some(1.0),
            background: Some(Color::TRANSPARENT),
            ..Self::boxed()
        }
    }

    pub fn border_radius(&self) -> f32 {
        self.border_radius.unwrap_or(8.0)
    }

    pub fn border_width(&self) -> f32 {
        self.border_width.unwrap_or(1.0)
    }

    pub fn border_bottom_width(&self) -> f32 {
        self.border_bottom_width.unwrap_or(0.0)
    }

    /// `None` means "use the theme's surface color".
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn padding_horizontal(&self) -> f32 {
        self.padding_horizontal.unwrap_or(12.0)
    }

    pub fn padding_vertical(&self) -> f32 {
        self.padding_vertical.unwrap_or(12.0)
    }

    pub fn label_font_size(&self) -> f32 {
        self.label_font_size.unwrap_or(14.0)
    }

    pub fn label_font_weight(&self) -> FontWeight {
        self.label_font_weight.unwrap_or(FontWeight::Medium)
    }

    pub fn helper_font_size(&self) -> f32 {
        self.helper_font_size.unwrap_or(12.0)
    }

    pub fn input_font_size(&self) -> f32 {
        self.input_font_size.unwrap_or(16.0)
    }
}

impl Overlay for InputTheme {
    fn overlay(&self, patch: &Self) -> Self {
        Self {
            border_radius: patch.border_radius.or(self.border_radius),
            border_width: patch.border_width.or(self.border_width),
            border_bottom_width: patch.border_bottom_width.or(self.border_bottom_width),
            background: patch.background.or(self.background),
            padding_horizontal: patch.padding_horizontal.or(self.padding_horizontal),
            padding_vertical: patch.padding_vertical.or(self.padding_vertical),
            label_font_size: patch.label_font_size.or(self.label_font_size),
            label_font_weight: patch.label_font_weight.or(self.label_font_weight),
            helper_font_size: patch.helper_font_size.or(self.helper_font_size),
            input_font_size: patch.input_font_size.or(self.input_font_size),
        }
    }
}
