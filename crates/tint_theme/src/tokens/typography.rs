//! Typography tokens: font sizes, weights, line heights, and the built-in
//! text variants.

use serde::{Deserialize, Serialize};

/// Font weight steps. Serialized by name so configs stay readable.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Black,
}

impl FontWeight {
    /// Numeric CSS-style weight value
    pub fn value(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::Black => 900,
        }
    }
}

/// Semantic font size token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Display1,
    Display2,
    Display3,
    Display4,
}

/// Font size scale
#[derive(Clone, Debug, PartialEq)]
pub struct FontSizeTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub display1: f32,
    pub display2: f32,
    pub display3: f32,
    pub display4: f32,
}

impl FontSizeTokens {
    pub fn get(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Xs => self.xs,
            FontSizeToken::Sm => self.sm,
            FontSizeToken::Md => self.md,
            FontSizeToken::Lg => self.lg,
            FontSizeToken::Xl => self.xl,
            FontSizeToken::Xxl => self.xxl,
            FontSizeToken::Xxxl => self.xxxl,
            FontSizeToken::Display1 => self.display1,
            FontSizeToken::Display2 => self.display2,
            FontSizeToken::Display3 => self.display3,
            FontSizeToken::Display4 => self.display4,
        }
    }
}

impl Default for FontSizeTokens {
    fn default() -> Self {
        Self {
            xs: 10.0,
            sm: 12.0,
            md: 14.0,
            lg: 16.0,
            xl: 18.0,
            xxl: 20.0,
            xxxl: 24.0,
            display1: 32.0,
            display2: 40.0,
            display3: 48.0,
            display4: 64.0,
        }
    }
}

/// Line height multipliers
#[derive(Clone, Debug, PartialEq)]
pub struct LineHeightTokens {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
    pub loose: f32,
}

impl Default for LineHeightTokens {
    fn default() -> Self {
        Self {
            tight: 1.2,
            normal: 1.5,
            relaxed: 1.75,
            loose: 2.0,
        }
    }
}

/// Letter spacing values in logical pixels
#[derive(Clone, Debug, PartialEq)]
pub struct LetterSpacingTokens {
    pub tight: f32,
    pub normal: f32,
    pub wide: f32,
    pub wider: f32,
}

impl Default for LetterSpacingTokens {
    fn default() -> Self {
        Self {
            tight: -0.5,
            normal: 0.0,
            wide: 0.5,
            wider: 1.0,
        }
    }
}

/// A fully resolved text style, the output of variant resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub line_height: f32,
    pub letter_spacing: f32,
}

/// Complete typography token set, including the built-in text variants that
/// apps can override per variant through `components.text`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypographyTokens {
    pub font_sizes: FontSizeTokens,
    pub line_heights: LineHeightTokens,
    pub letter_spacings: LetterSpacingTokens,
}

impl TypographyTokens {
    /// Built-in variant lookup by name. Returns `None` for names only an
    /// app-level override defines.
    pub fn builtin_variant(&self, name: &str) -> Option<TextStyle> {
        match name {
            "title" => Some(self.style(self.font_sizes.lg, FontWeight::Medium)),
            "body" => Some(self.style(self.font_sizes.md, FontWeight::Regular)),
            "caption" => Some(self.style(self.font_sizes.sm, FontWeight::Regular)),
            _ => None,
        }
    }

    /// The `body` variant, the fallback for unknown variant names.
    pub fn body(&self) -> TextStyle {
        self.style(self.font_sizes.md, FontWeight::Regular)
    }

    fn style(&self, font_size: f32, font_weight: FontWeight) -> TextStyle {
        TextStyle {
            font_size,
            font_weight,
            line_height: font_size * self.line_heights.normal,
            letter_spacing: self.letter_spacings.normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_variants_derive_line_height_from_size() {
        let t = TypographyTokens::default();
        let title = t.builtin_variant("title").unwrap();
        assert_eq!(title.font_size, 16.0);
        assert_eq!(title.font_weight, FontWeight::Medium);
        assert_eq!(title.line_height, 24.0);
        assert!(t.builtin_variant("heading").is_none());
    }

    #[test]
    fn weights_map_to_css_values() {
        assert_eq!(FontWeight::Regular.value(), 400);
        assert_eq!(FontWeight::Black.value(), 900);
    }
}
