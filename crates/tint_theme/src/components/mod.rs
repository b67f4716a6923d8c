//! Component theme schemas and the layered merge seam.
//!
//! Each component schema is a bundle of optional style attributes with
//! documented fallbacks. Resolution applies a three-way merge per attribute:
//!
//! built-in default < base-mode component theme < config-level override
//!
//! Partial overrides never erase attributes they leave unset.

mod input;
mod text;

pub use input::InputTheme;
pub use text::{PartialTextStyle, TextTheme};

use serde::{Deserialize, Serialize};

/// Layered partial merge: apply `patch` on top of `self`, attribute by
/// attribute. Map-valued attributes (text variants) merge one level deeper
/// instead of being replaced wholesale.
pub trait Overlay<P = Self> {
    fn overlay(&self, patch: &P) -> Self;
}

/// The component themes embedded in a resolved theme. Always complete in
/// the sense that both members exist; their attributes stay optional so
/// widgets can apply their own fallbacks.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentThemes {
    pub input: InputTheme,
    pub text: TextTheme,
}

impl Default for ComponentThemes {
    fn default() -> Self {
        Self {
            input: InputTheme::boxed(),
            text: TextTheme::default(),
        }
    }
}

/// Config-level component overrides, all optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOverrides {
    pub input: Option<InputTheme>,
    pub text: Option<TextTheme>,
}

impl Overlay<ComponentOverrides> for ComponentThemes {
    fn overlay(&self, patch: &ComponentOverrides) -> Self {
        let mut input = InputTheme::boxed().overlay(&self.input);
        if let Some(p) = &patch.input {
            input = input.overlay(p);
        }
        let mut text = TextTheme::default().overlay(&self.text);
        if let Some(p) = &patch.text {
            text = text.overlay(p);
        }
        Self { input, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_keywise_not_replacement() {
        let base = ComponentThemes::default();
        let patch = ComponentOverrides {
            input: Some(InputTheme {
                border_radius: Some(0.0),
                ..InputTheme::default()
            }),
            text: None,
        };
        let merged = base.overlay(&patch);
        assert_eq!(merged.input.border_radius(), 0.0);
        // untouched attributes keep their defaults
        assert_eq!(merged.input.border_width(), 1.0);
        assert_eq!(merged.input.padding_horizontal(), 12.0);
        assert_eq!(merged.text, TextTheme::default());
    }

    #[test]
    fn empty_override_is_identity() {
        let base = ComponentThemes::default();
        assert_eq!(base.overlay(&ComponentOverrides::default()), base);
    }
}
