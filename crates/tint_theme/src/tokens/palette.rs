//! Color palette primitives.
//!
//! A [`Palette`] is a named family of shades indexed by a Material-style
//! numeric step (50–900). The palettes here are the raw material the theme
//! resolver picks from; resolved themes only ever expose semantic roles.

use tint_core::Color;

/// A family of color shades indexed by step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub s50: Color,
    pub s100: Color,
    pub s200: Color,
    pub s300: Color,
    pub s400: Color,
    pub s500: Color,
    pub s600: Color,
    pub s700: Color,
    pub s800: Color,
    pub s900: Color,
}

impl Palette {
    /// Get a shade by numeric step. Unknown steps fall back to 500, the
    /// family's reference shade.
    pub fn shade(&self, step: u16) -> Color {
        match step {
            50 => self.s50,
            100 => self.s100,
            200 => self.s200,
            300 => self.s300,
            400 => self.s400,
            500 => self.s500,
            600 => self.s600,
            700 => self.s700,
            800 => self.s800,
            900 => self.s900,
            _ => self.s500,
        }
    }
}

/// Named palette families available to the `primary_color` shortcut.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PaletteName {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Yellow,
}

impl PaletteName {
    /// Look up a palette family by its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "purple" => Some(Self::Purple),
            "orange" => Some(Self::Orange),
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Blue => &BLUE,
            Self::Green => &GREEN,
            Self::Purple => &PURPLE,
            Self::Orange => &ORANGE,
            Self::Red => &RED,
            Self::Yellow => &YELLOW,
        }
    }

    pub fn all() -> &'static [PaletteName] {
        const NAMES: [PaletteName; 6] = [
            PaletteName::Blue,
            PaletteName::Green,
            PaletteName::Purple,
            PaletteName::Orange,
            PaletteName::Red,
            PaletteName::Yellow,
        ];
        &NAMES
    }
}

pub const BLUE: Palette = Palette {
    s50: Color::from_hex(0xE3F2FD),
    s100: Color::from_hex(0xBBDEFB),
    s200: Color::from_hex(0x90CAF9),
    s300: Color::from_hex(0x64B5F6),
    s400: Color::from_hex(0x42A5F5),
    s500: Color::from_hex(0x2196F3),
    s600: Color::from_hex(0x1E88E5),
    s700: Color::from_hex(0x1976D2),
    s800: Color::from_hex(0x1565C0),
    s900: Color::from_hex(0x0D47A1),
};

pub const GREEN: Palette = Palette {
    s50: Color::from_hex(0xE8F5E9),
    s100: Color::from_hex(0xC8E6C9),
    s200: Color::from_hex(0xA5D6A7),
    s300: Color::from_hex(0x81C784),
    s400: Color::from_hex(0x66BB6A),
    s500: Color::from_hex(0x4CAF50),
    s600: Color::from_hex(0x43A047),
    s700: Color::from_hex(0x388E3C),
    s800: Color::from_hex(0x2E7D32),
    s900: Color::from_hex(0x1B5E20),
};

pub const PURPLE: Palette = Palette {
    s50: Color::from_hex(0xF3E5F5),
    s100: Color::from_hex(0xE1BEE7),
    s200: Color::from_hex(0xCE93D8),
    s300: Color::from_hex(0xBA68C8),
    s400: Color::from_hex(0xAB47BC),
    s500: Color::from_hex(0x9C27B0),
    s600: Color::from_hex(0x8E24AA),
    s700: Color::from_hex(0x7B1FA2),
    s800: Color::from_hex(0x6A1B9A),
    s900: Color::from_hex(0x4A148C),
};

pub const ORANGE: Palette = Palette {
    s50: Color::from_hex(0xFFF3E0),
    s100: Color::from_hex(0xFFE0B2),
    s200: Color::from_hex(0xFFCC80),
    s300: Color::from_hex(0xFFB74D),
    s400: Color::from_hex(0xFFA726),
    s500: Color::from_hex(0xFF9800),
    s600: Color::from_hex(0xFB8C00),
    s700: Color::from_hex(0xF57C00),
    s800: Color::from_hex(0xEF6C00),
    s900: Color::from_hex(0xE65100),
};

pub const RED: Palette = Palette {
    s50: Color::from_hex(0xFFEBEE),
    s100: Color::from_hex(0xFFCDD2),
    s200: Color::from_hex(0xEF9A9A),
    s300: Color::from_hex(0xE57373),
    s400: Color::from_hex(0xEF5350),
    s500: Color::from_hex(0xF44336),
    s600: Color::from_hex(0xE53935),
    s700: Color::from_hex(0xD32F2F),
    s800: Color::from_hex(0xC62828),
    s900: Color::from_hex(0xB71C1C),
};

pub const YELLOW: Palette = Palette {
    s50: Color::from_hex(0xFFFDE7),
    s100: Color::from_hex(0xFFF9C4),
    s200: Color::from_hex(0xFFF59D),
    s300: Color::from_hex(0xFFF176),
    s400: Color::from_hex(0xFFEE58),
    s500: Color::from_hex(0xFFEB3B),
    s600: Color::from_hex(0xFDD835),
    s700: Color::from_hex(0xFBC02D),
    s800: Color::from_hex(0xF9A825),
    s900: Color::from_hex(0xF57F17),
};

/// Neutral (grayscale) scale. Step 0 is pure white, used for the light
/// theme's background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeutralScale {
    pub n0: Color,
    pub n50: Color,
    pub n100: Color,
    pub n200: Color,
    pub n300: Color,
    pub n400: Color,
    pub n500: Color,
    pub n600: Color,
    pub n700: Color,
    pub n800: Color,
    pub n900: Color,
}

pub const NEUTRAL: NeutralScale = NeutralScale {
    n0: Color::from_hex(0xFFFFFF),
    n50: Color::from_hex(0xFAFAFA),
    n100: Color::from_hex(0xF5F5F5),
    n200: Color::from_hex(0xEEEEEE),
    n300: Color::from_hex(0xE0E0E0),
    n400: Color::from_hex(0xBDBDBD),
    n500: Color::from_hex(0x9E9E9E),
    n600: Color::from_hex(0x757575),
    n700: Color::from_hex(0x616161),
    n800: Color::from_hex(0x424242),
    n900: Color::from_hex(0x212121),
};

/// A status (feedback) color with its light and dark variants. Light themes
/// use `main`, dark themes use `light` for better contrast on dark surfaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusColor {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
}

pub const SUCCESS: StatusColor = StatusColor {
    main: Color::from_hex(0x4CAF50),
    light: Color::from_hex(0x81C784),
    dark: Color::from_hex(0x388E3C),
};

pub const ERROR: StatusColor = StatusColor {
    main: Color::from_hex(0xF44336),
    light: Color::from_hex(0xE57373),
    dark: Color::from_hex(0xD32F2F),
};

pub const WARNING: StatusColor = StatusColor {
    main: Color::from_hex(0xFF9800),
    light: Color::from_hex(0xFFB74D),
    dark: Color::from_hex(0xF57C00),
};

pub const INFO: StatusColor = StatusColor {
    main: Color::from_hex(0x2196F3),
    light: Color::from_hex(0x64B5F6),
    dark: Color::from_hex(0x1976D2),
};
