//! Shadow tokens for elevation.

use tint_core::Color;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            color: Color::TRANSPARENT,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens for one color scheme.
///
/// Dark mode uses higher opacities: soft shadows disappear against dark
/// surfaces.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub none: Shadow,
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
    pub xxl: Shadow,
}

impl ShadowTokens {
    /// Get a shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::None => &self.none,
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Xl => &self.xl,
            ShadowToken::Xxl => &self.xxl,
        }
    }

    /// Shadow tokens for a light color scheme
    pub fn light() -> Self {
        let base = Color::BLACK;
        Self {
            none: Shadow::none(),
            sm: Shadow::new(0.0, 1.0, 1.0, base.with_alpha(0.18)),
            md: Shadow::new(0.0, 2.0, 2.22, base.with_alpha(0.22)),
            lg: Shadow::new(0.0, 4.0, 3.84, base.with_alpha(0.25)),
            xl: Shadow::new(0.0, 6.0, 4.65, base.with_alpha(0.27)),
            xxl: Shadow::new(0.0, 8.0, 5.46, base.with_alpha(0.30)),
        }
    }

    /// Shadow tokens for a dark color scheme
    pub fn dark() -> Self {
        let base = Color::BLACK;
        Self {
            none: Shadow::none(),
            sm: Shadow::new(0.0, 1.0, 1.0, base.with_alpha(0.40)),
            md: Shadow::new(0.0, 2.0, 2.22, base.with_alpha(0.45)),
            lg: Shadow::new(0.0, 4.0, 3.84, base.with_alpha(0.50)),
            xl: Shadow::new(0.0, 6.0, 4.65, base.with_alpha(0.55)),
            xxl: Shadow::new(0.0, 8.0, 5.46, base.with_alpha(0.60)),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}
