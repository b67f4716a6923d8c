//! Resolved themes and the built-in default light/dark pair.

use crate::components::ComponentThemes;
use crate::tokens::palette;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use tint_core::Color;

/// Light or dark rendering scheme.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Primary,
    PrimaryLight,
    PrimaryDark,
    Secondary,
    SecondaryLight,
    SecondaryDark,
    Background,
    Surface,
    SurfaceVariant,
    Text,
    TextSecondary,
    TextDisabled,
    Border,
    Divider,
    Success,
    Error,
    Warning,
    Info,
    Shadow,
    Overlay,
}

impl ColorRole {
    /// All roles, in declaration order.
    pub fn all() -> &'static [ColorRole] {
        const ROLES: [ColorRole; 20] = [
            ColorRole::Primary,
            ColorRole::PrimaryLight,
            ColorRole::PrimaryDark,
            ColorRole::Secondary,
            ColorRole::SecondaryLight,
            ColorRole::SecondaryDark,
            ColorRole::Background,
            ColorRole::Surface,
            ColorRole::SurfaceVariant,
            ColorRole::Text,
            ColorRole::TextSecondary,
            ColorRole::TextDisabled,
            ColorRole::Border,
            ColorRole::Divider,
            ColorRole::Success,
            ColorRole::Error,
            ColorRole::Warning,
            ColorRole::Info,
            ColorRole::Shadow,
            ColorRole::Overlay,
        ];
        &ROLES
    }

    /// Stable config key for this role.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primary_light",
            Self::PrimaryDark => "primary_dark",
            Self::Secondary => "secondary",
            Self::SecondaryLight => "secondary_light",
            Self::SecondaryDark => "secondary_dark",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::SurfaceVariant => "surface_variant",
            Self::Text => "text",
            Self::TextSecondary => "text_secondary",
            Self::TextDisabled => "text_disabled",
            Self::Border => "border",
            Self::Divider => "divider",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Shadow => "shadow",
            Self::Overlay => "overlay",
        }
    }

    /// Reverse lookup for config keys; `None` marks a custom key.
    pub fn from_name(name: &str) -> Option<Self> {
        ColorRole::all()
            .iter()
            .copied()
            .find(|role| role.name() == name)
    }
}

/// A fully resolved theme for one color scheme.
///
/// Every semantic role is guaranteed present: resolution starts from the
/// built-in defaults and only ever overwrites. `custom` carries app-defined
/// extra color keys verbatim (string values only).
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub secondary: Color,
    pub secondary_light: Color,
    pub secondary_dark: Color,
    pub background: Color,
    pub surface: Color,
    pub surface_variant: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub border: Color,
    pub divider: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub shadow: Color,
    pub overlay: Color,

    /// Component theme overrides for this mode
    pub components: ComponentThemes,

    /// App-defined custom color keys, copied verbatim from the config
    pub custom: FxHashMap<String, String>,
}

impl Theme {
    /// Get a color by role key
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryLight => self.primary_light,
            ColorRole::PrimaryDark => self.primary_dark,
            ColorRole::Secondary => self.secondary,
            ColorRole::SecondaryLight => self.secondary_light,
            ColorRole::SecondaryDark => self.secondary_dark,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::SurfaceVariant => self.surface_variant,
            ColorRole::Text => self.text,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextDisabled => self.text_disabled,
            ColorRole::Border => self.border,
            ColorRole::Divider => self.divider,
            ColorRole::Success => self.success,
            ColorRole::Error => self.error,
            ColorRole::Warning => self.warning,
            ColorRole::Info => self.info,
            ColorRole::Shadow => self.shadow,
            ColorRole::Overlay => self.overlay,
        }
    }

    fn set_color(&mut self, role: ColorRole, color: Color) {
        match role {
            ColorRole::Primary => self.primary = color,
            ColorRole::PrimaryLight => self.primary_light = color,
            ColorRole::PrimaryDark => self.primary_dark = color,
            ColorRole::Secondary => self.secondary = color,
            ColorRole::SecondaryLight => self.secondary_light = color,
            ColorRole::SecondaryDark => self.secondary_dark = color,
            ColorRole::Background => self.background = color,
            ColorRole::Surface => self.surface = color,
            ColorRole::SurfaceVariant => self.surface_variant = color,
            ColorRole::Text => self.text = color,
            ColorRole::TextSecondary => self.text_secondary = color,
            ColorRole::TextDisabled => self.text_disabled = color,
            ColorRole::Border => self.border = color,
            ColorRole::Divider => self.divider = color,
            ColorRole::Success => self.success = color,
            ColorRole::Error => self.error = color,
            ColorRole::Warning => self.warning = color,
            ColorRole::Info => self.info = color,
            ColorRole::Shadow => self.shadow = color,
            ColorRole::Overlay => self.overlay = color,
        }
    }

    /// Overwrite a role by its config key; custom keys land in the `custom`
    /// side map.
    pub fn set_by_name(&mut self, name: &str, color: Color) {
        match ColorRole::from_name(name) {
            Some(role) => self.set_color(role, color),
            None => {
                self.custom.insert(name.to_owned(), color.to_hex_string());
            }
        }
    }

    /// Insert a custom color key verbatim. Known role names are not valid
    /// custom keys and are routed to the typed field instead.
    pub(crate) fn set_custom(&mut self, key: &str, value: &str) {
        match ColorRole::from_name(key) {
            Some(role) => {
                if let Some(color) = Color::parse(value) {
                    self.set_color(role, color);
                }
            }
            None => {
                self.custom.insert(key.to_owned(), value.to_owned());
            }
        }
    }

    /// Look up a custom color key, parsed as a color.
    pub fn custom_color(&self, key: &str) -> Option<Color> {
        self.custom.get(key).and_then(|raw| Color::parse(raw))
    }

    /// The built-in default theme for a scheme.
    pub fn default_for(scheme: ColorScheme) -> &'static Theme {
        match scheme {
            ColorScheme::Light => &DEFAULT_LIGHT,
            ColorScheme::Dark => &DEFAULT_DARK,
        }
    }
}

/// The resolved light/dark pair an application renders from.
///
/// Computed once per config and immutable afterwards: mode switching picks
/// one of the two precomputed themes, it never re-resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemePair {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemePair {
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            light: DEFAULT_LIGHT.clone(),
            dark: DEFAULT_DARK.clone(),
        }
    }
}

/// Built-in default light theme (blue primaries on neutral surfaces)
pub static DEFAULT_LIGHT: LazyLock<Theme> = LazyLock::new(|| Theme {
    primary: palette::BLUE.s500,
    primary_light: palette::BLUE.s300,
    primary_dark: palette::BLUE.s700,
    secondary: palette::PURPLE.s500,
    secondary_light: palette::PURPLE.s300,
    secondary_dark: palette::PURPLE.s700,
    background: palette::NEUTRAL.n0,
    surface: palette::NEUTRAL.n50,
    surface_variant: palette::NEUTRAL.n100,
    text: palette::NEUTRAL.n900,
    text_secondary: palette::NEUTRAL.n700,
    text_disabled: palette::NEUTRAL.n500,
    border: palette::NEUTRAL.n300,
    divider: palette::NEUTRAL.n200,
    success: palette::SUCCESS.main,
    error: palette::ERROR.main,
    warning: palette::WARNING.main,
    info: palette::INFO.main,
    shadow: Color::BLACK.with_alpha(0.1),
    overlay: Color::BLACK.with_alpha(0.5),
    components: ComponentThemes::default(),
    custom: FxHashMap::default(),
});

/// Built-in default dark theme
pub static DEFAULT_DARK: LazyLock<Theme> = LazyLock::new(|| Theme {
    primary: palette::BLUE.s400,
    primary_light: palette::BLUE.s300,
    primary_dark: palette::BLUE.s600,
    secondary: palette::PURPLE.s400,
    secondary_light: palette::PURPLE.s300,
    secondary_dark: palette::PURPLE.s600,
    background: Color::from_hex(0x121212),
    surface: Color::from_hex(0x1E1E1E),
    surface_variant: Color::from_hex(0x2C2C2C),
    text: palette::NEUTRAL.n50,
    text_secondary: palette::NEUTRAL.n300,
    text_disabled: palette::NEUTRAL.n600,
    border: palette::NEUTRAL.n700,
    divider: palette::NEUTRAL.n800,
    success: palette::SUCCESS.light,
    error: palette::ERROR.light,
    warning: palette::WARNING.light,
    info: palette::INFO.light,
    shadow: Color::BLACK.with_alpha(0.4),
    overlay: Color::BLACK.with_alpha(0.7),
    components: ComponentThemes::default(),
    custom: FxHashMap::default(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in ColorRole::all() {
            assert_eq!(ColorRole::from_name(role.name()), Some(*role));
        }
        assert_eq!(ColorRole::from_name("accent"), None);
    }

    #[test]
    fn defaults_differ_per_scheme() {
        assert_ne!(DEFAULT_LIGHT.primary, DEFAULT_DARK.primary);
        assert_ne!(DEFAULT_LIGHT.background, DEFAULT_DARK.background);
    }

    #[test]
    fn default_pair_selects_by_scheme() {
        let pair = ThemePair::default();
        assert_eq!(pair.for_scheme(ColorScheme::Light), &*DEFAULT_LIGHT);
        assert_eq!(pair.for_scheme(ColorScheme::Dark), &*DEFAULT_DARK);
    }
}
