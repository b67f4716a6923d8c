//! Theme configuration: the input side of resolution.
//!
//! Configs are deliberately lenient. A malformed color string or a
//! non-string value where a color is expected deserializes to "absent" and
//! the built-in default survives — appearance config must never take the
//! app down. Only TOML syntax errors are surfaced, from
//! [`ThemeConfig::from_toml_str`].

use crate::components::ComponentOverrides;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use tint_core::Color;

/// Lenient color field: strings parse as colors, unparseable strings and
/// non-string values become `None`.
fn lenient_color<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Color>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(d)? {
        Raw::Text(s) => Color::parse(&s),
        Raw::Other(_) => None,
    })
}

/// Per-mode color overrides. Every semantic role is optional; unset roles
/// keep the built-in default of the mode being resolved. Unknown keys are
/// collected in `custom` and — when their value is a string — copied onto
/// the resolved theme verbatim.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    #[serde(deserialize_with = "lenient_color")]
    pub primary: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub primary_light: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub primary_dark: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub secondary: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub secondary_light: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub secondary_dark: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub background: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub surface: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub surface_variant: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub text: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub text_secondary: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub text_disabled: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub border: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub divider: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub success: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub error: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub warning: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub info: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub shadow: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub overlay: Option<Color>,

    /// Keys outside the known role set. Only string values survive
    /// resolution; anything else is dropped there.
    #[serde(flatten)]
    pub custom: BTreeMap<String, toml::Value>,
}

impl ThemeColors {
    /// Add a custom color key programmatically.
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom
            .insert(key.into(), toml::Value::String(value.into()));
        self
    }
}

/// App-supplied theme customization, three levels:
///
/// 1. `primary_color`: palette shortcut (`"blue"`, `"orange"`, ...)
/// 2. `light` / `dark`: explicit per-mode color maps — these win over the
///    shortcut when both are present
/// 3. `components`: per-component overrides, applied to both modes
///
/// For full manual control use [`crate::define_theme`] instead.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Palette shortcut. Unrecognized names fall back to `"blue"`.
    pub primary_color: Option<String>,
    pub light: Option<ThemeColors>,
    pub dark: Option<ThemeColors>,
    /// Shared across both modes.
    pub components: Option<ComponentOverrides>,
}

impl ThemeConfig {
    /// Parse a config from a TOML document.
    ///
    /// Syntax errors are returned; semantic problems inside a well-formed
    /// document (bad color strings, wrong value types) degrade to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// One mode's input to [`crate::define_theme`]: a color map plus this
/// mode's own component overrides.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefineModeConfig {
    /// Component overrides for this mode only.
    pub components: Option<ComponentOverrides>,
    #[serde(flatten)]
    pub colors: ThemeColors,
}

/// Input to [`crate::define_theme`]: full manual control, one config per
/// mode. Fallbacks are mode-local — a missing `primary` in `dark` falls
/// back to the dark built-in default, never to `light`'s value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefineThemeConfig {
    pub light: DefineModeConfig,
    pub dark: DefineModeConfig,
}

impl DefineThemeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_shortcut() {
        let config = ThemeConfig::from_toml_str("primary_color = \"orange\"").unwrap();
        assert_eq!(config.primary_color.as_deref(), Some("orange"));
        assert!(config.light.is_none());
    }

    #[test]
    fn malformed_color_string_becomes_absent() {
        let config = ThemeConfig::from_toml_str(
            "[light]\nprimary = \"not-a-color\"\nbackground = \"#FFFFFF\"\n",
        )
        .unwrap();
        let light = config.light.unwrap();
        assert_eq!(light.primary, None);
        assert_eq!(light.background, Some(Color::WHITE));
    }

    #[test]
    fn non_string_color_value_becomes_absent() {
        let config = ThemeConfig::from_toml_str("[light]\nprimary = 123\n").unwrap();
        assert_eq!(config.light.unwrap().primary, None);
    }

    #[test]
    fn unknown_keys_collect_as_custom() {
        let config =
            ThemeConfig::from_toml_str("[light]\naccent = \"#FF00FF\"\nbogus = 7\n").unwrap();
        let light = config.light.unwrap();
        assert_eq!(
            light.custom.get("accent"),
            Some(&toml::Value::String("#FF00FF".into()))
        );
        assert_eq!(light.custom.get("bogus"), Some(&toml::Value::Integer(7)));
    }

    #[test]
    fn component_overrides_parse() {
        let config = ThemeConfig::from_toml_str(
            "[components.input]\nborder_radius = 0.0\n\n[components.text.variants.title]\nfont_size = 22.0\n",
        )
        .unwrap();
        let components = config.components.unwrap();
        assert_eq!(components.input.unwrap().border_radius, Some(0.0));
        assert_eq!(
            components.text.unwrap().variants["title"].font_size,
            Some(22.0)
        );
    }
}
