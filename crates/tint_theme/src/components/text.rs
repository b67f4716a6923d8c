//! Text component theme schema.
//!
//! Apps override the built-in text variants (`title`, `body`, `caption`) or
//! define custom ones (e.g. `heading`) through `components.text.variants`.
//! The text widget resolves a variant name to the built-in style (falling
//! back to `body` for unknown names) and applies the override on top.

use super::Overlay;
use crate::tokens::{FontWeight, TextStyle, TypographyTokens};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A partial text style: only the set fields override the variant's base.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTextStyle {
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
}

impl PartialTextStyle {
    /// Apply this partial on top of a resolved style.
    pub fn apply(&self, base: TextStyle) -> TextStyle {
        TextStyle {
            font_size: self.font_size.unwrap_or(base.font_size),
            font_weight: self.font_weight.unwrap_or(base.font_weight),
            line_height: self.line_height.unwrap_or(base.line_height),
            letter_spacing: self.letter_spacing.unwrap_or(base.letter_spacing),
        }
    }
}

impl Overlay for PartialTextStyle {
    fn overlay(&self, patch: &Self) -> Self {
        Self {
            font_size: patch.font_size.or(self.font_size),
            font_weight: patch.font_weight.or(self.font_weight),
            line_height: patch.line_height.or(self.line_height),
            letter_spacing: patch.letter_spacing.or(self.letter_spacing),
        }
    }
}

/// Per-variant text overrides keyed by variant name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextTheme {
    pub variants: FxHashMap<String, PartialTextStyle>,
}

impl TextTheme {
    /// Resolve a variant name to a complete style: built-in base (unknown
    /// names use `body`) with this theme's override applied on top.
    pub fn style_for(&self, variant: &str, typography: &TypographyTokens) -> TextStyle {
        let base = typography
            .builtin_variant(variant)
            .unwrap_or_else(|| typography.body());
        match self.variants.get(variant) {
            Some(partial) => partial.apply(base),
            None => base,
        }
    }
}

impl Overlay for TextTheme {
    /// Variant maps merge one level deep: overriding `title` merges its
    /// fields into the base `title` and leaves every other variant intact.
    fn overlay(&self, patch: &Self) -> Self {
        let mut variants = self.variants.clone();
        for (name, partial) in &patch.variants {
            let merged = match variants.get(name) {
                Some(base) => base.overlay(partial),
                None => partial.clone(),
            };
            variants.insert(name.clone(), merged);
        }
        Self { variants }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(size: f32) -> PartialTextStyle {
        PartialTextStyle {
            font_size: Some(size),
            ..PartialTextStyle::default()
        }
    }

    #[test]
    fn overlay_does_not_drop_other_variants() {
        let mut base = TextTheme::default();
        base.variants.insert("title".into(), partial(20.0));

        let mut patch = TextTheme::default();
        patch.variants.insert("body".into(), partial(15.0));

        let merged = base.overlay(&patch);
        assert_eq!(merged.variants["title"].font_size, Some(20.0));
        assert_eq!(merged.variants["body"].font_size, Some(15.0));
    }

    #[test]
    fn overlay_merges_variant_fields() {
        let mut base = TextTheme::default();
        base.variants.insert(
            "title".into(),
            PartialTextStyle {
                font_weight: Some(FontWeight::Bold),
                ..PartialTextStyle::default()
            },
        );

        let mut patch = TextTheme::default();
        patch.variants.insert("title".into(), partial(22.0));

        let title = &base.overlay(&patch).variants["title"];
        assert_eq!(title.font_size, Some(22.0));
        assert_eq!(title.font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn unknown_variant_resolves_to_body() {
        let theme = TextTheme::default();
        let typography = TypographyTokens::default();
        assert_eq!(theme.style_for("nope", &typography), typography.body());
    }

    #[test]
    fn custom_variant_overrides_body_base() {
        let mut theme = TextTheme::default();
        theme.variants.insert("heading".into(), partial(28.0));
        let typography = TypographyTokens::default();
        let style = theme.style_for("heading", &typography);
        assert_eq!(style.font_size, 28.0);
        assert_eq!(style.font_weight, typography.body().font_weight);
    }
}
