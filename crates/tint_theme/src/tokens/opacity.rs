//! Opacity tokens.

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    Transparent,
    Subtle,
    Light,
    Muted,
    Medium,
    High,
    Heavy,
    Intense,
    Opaque,
}

/// General opacity scale
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub transparent: f32,
    pub subtle: f32,
    pub light: f32,
    pub muted: f32,
    pub medium: f32,
    pub high: f32,
    pub heavy: f32,
    pub intense: f32,
    pub opaque: f32,
}

impl OpacityTokens {
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Transparent => self.transparent,
            OpacityToken::Subtle => self.subtle,
            OpacityToken::Light => self.light,
            OpacityToken::Muted => self.muted,
            OpacityToken::Medium => self.medium,
            OpacityToken::High => self.high,
            OpacityToken::Heavy => self.heavy,
            OpacityToken::Intense => self.intense,
            OpacityToken::Opaque => self.opaque,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            transparent: 0.0,
            subtle: 0.05,
            light: 0.1,
            muted: 0.2,
            medium: 0.4,
            high: 0.6,
            heavy: 0.75,
            intense: 0.9,
            opaque: 1.0,
        }
    }
}

/// Opacities applied to interaction states
#[derive(Clone, Debug, PartialEq)]
pub struct StateOpacityTokens {
    pub hover: f32,
    pub focus: f32,
    pub pressed: f32,
    pub disabled: f32,
    pub selected: f32,
}

impl Default for StateOpacityTokens {
    fn default() -> Self {
        Self {
            hover: 0.08,
            focus: 0.12,
            pressed: 0.16,
            disabled: 0.38,
            selected: 0.12,
        }
    }
}
