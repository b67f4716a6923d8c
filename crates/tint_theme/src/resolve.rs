//! Theme resolution: from an app-supplied config to a complete light/dark
//! pair.
//!
//! Resolution never fails. Unrecognized palette names substitute blue,
//! malformed values keep their built-in default, and every semantic role of
//! the output is guaranteed present.

use crate::components::Overlay;
use crate::config::{DefineModeConfig, DefineThemeConfig, ThemeColors, ThemeConfig};
use crate::theme::{ColorScheme, Theme, ThemePair};
use crate::tokens::PaletteName;

/// Resolve a [`ThemeConfig`] into the light/dark theme pair.
///
/// Precedence, first matching branch wins:
///
/// 1. no config → built-in defaults
/// 2. explicit `light`/`dark` color maps (win over the shortcut)
/// 3. `primary_color` palette shortcut (unknown names → blue)
/// 4. otherwise → built-in defaults
///
/// Component overrides are applied afterwards, to both modes alike,
/// whichever branch matched.
pub fn create_theme(config: Option<&ThemeConfig>) -> ThemePair {
    let Some(config) = config else {
        return ThemePair::default();
    };

    let mut pair = if config.light.is_some() || config.dark.is_some() {
        ThemePair {
            light: overridden(ColorScheme::Light, config.light.as_ref()),
            dark: overridden(ColorScheme::Dark, config.dark.as_ref()),
        }
    } else if let Some(name) = config.primary_color.as_deref() {
        let family = PaletteName::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, "unrecognized palette shortcut, using blue");
            PaletteName::Blue
        });
        let palette = family.palette();
        let mut light = Theme::default_for(ColorScheme::Light).clone();
        light.primary = palette.s500;
        light.primary_light = palette.s300;
        light.primary_dark = palette.s700;
        let mut dark = Theme::default_for(ColorScheme::Dark).clone();
        dark.primary = palette.s400;
        dark.primary_light = palette.s300;
        dark.primary_dark = palette.s600;
        ThemePair { light, dark }
    } else {
        ThemePair::default()
    };

    if let Some(overrides) = &config.components {
        pair.light.components = pair.light.components.overlay(overrides);
        pair.dark.components = pair.dark.components.overlay(overrides);
    }

    pair
}

/// Resolve a fully manual theme definition.
///
/// Unlike [`create_theme`], component overrides are merged per mode
/// independently: the light config's components only affect the light
/// theme. Color fallbacks are mode-local as well.
pub fn define_theme(config: &DefineThemeConfig) -> ThemePair {
    ThemePair {
        light: define_mode(ColorScheme::Light, &config.light),
        dark: define_mode(ColorScheme::Dark, &config.dark),
    }
}

fn define_mode(scheme: ColorScheme, config: &DefineModeConfig) -> Theme {
    let mut theme = Theme::default_for(scheme).clone();
    apply_colors(&mut theme, &config.colors);
    if let Some(overrides) = &config.components {
        theme.components = theme.components.overlay(overrides);
    }
    theme
}

fn overridden(scheme: ColorScheme, colors: Option<&ThemeColors>) -> Theme {
    let mut theme = Theme::default_for(scheme).clone();
    if let Some(colors) = colors {
        apply_colors(&mut theme, colors);
    }
    theme
}

/// Overwrite the set roles of `theme` and promote custom string keys.
/// Non-string custom values are dropped here, never propagated.
fn apply_colors(theme: &mut Theme, colors: &ThemeColors) {
    macro_rules! apply {
        ($($field:ident),+ $(,)?) => {
            $(if let Some(color) = colors.$field {
                theme.$field = color;
            })+
        };
    }
    apply!(
        primary,
        primary_light,
        primary_dark,
        secondary,
        secondary_light,
        secondary_dark,
        background,
        surface,
        surface_variant,
        text,
        text_secondary,
        text_disabled,
        border,
        divider,
        success,
        error,
        warning,
        info,
        shadow,
        overlay,
    );

    for (key, value) in &colors.custom {
        if let toml::Value::String(raw) = value {
            theme.set_custom(key, raw);
        }
    }
}
