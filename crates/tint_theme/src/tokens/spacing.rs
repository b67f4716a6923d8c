//! Spacing tokens (4px-based scale).

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Huge,
    Massive,
    Giant,
}

impl SpacingToken {
    /// Look up a token by its scale name. Unknown names fall back to `Md`,
    /// so a typo in a config degrades to the default gap instead of failing
    /// on a render path.
    pub fn from_name(name: &str) -> Self {
        match name {
            "xxs" => Self::Xxs,
            "xs" => Self::Xs,
            "sm" => Self::Sm,
            "md" => Self::Md,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            "xxl" => Self::Xxl,
            "xxxl" => Self::Xxxl,
            "huge" => Self::Huge,
            "massive" => Self::Massive,
            "giant" => Self::Giant,
            _ => Self::Md,
        }
    }
}

/// Complete spacing scale
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub huge: f32,
    pub massive: f32,
    pub giant: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
            SpacingToken::Huge => self.huge,
            SpacingToken::Massive => self.massive,
            SpacingToken::Giant => self.giant,
        }
    }

    /// Resolve either a token or a literal pixel value. Call sites that
    /// accept a numeric override pass it straight through.
    pub fn resolve(&self, value: impl Into<SpacingValue>) -> f32 {
        match value.into() {
            SpacingValue::Token(token) => self.get(token),
            SpacingValue::Px(px) => px,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xxs: 2.0,
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 20.0,
            xxl: 24.0,
            xxxl: 32.0,
            huge: 40.0,
            massive: 48.0,
            giant: 64.0,
        }
    }
}

/// A spacing argument: either a scale token or a literal pixel value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpacingValue {
    Token(SpacingToken),
    Px(f32),
}

impl From<SpacingToken> for SpacingValue {
    fn from(token: SpacingToken) -> Self {
        Self::Token(token)
    }
}

impl From<f32> for SpacingValue {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_four_px_based() {
        let s = SpacingTokens::default();
        assert_eq!(s.get(SpacingToken::Xs), 4.0);
        assert_eq!(s.get(SpacingToken::Sm), 8.0);
        assert_eq!(s.get(SpacingToken::Giant), 64.0);
    }

    #[test]
    fn unknown_name_falls_back_to_md() {
        let s = SpacingTokens::default();
        assert_eq!(s.get(SpacingToken::from_name("enormous")), s.md);
    }

    #[test]
    fn literal_values_pass_through() {
        let s = SpacingTokens::default();
        assert_eq!(s.resolve(13.5), 13.5);
        assert_eq!(s.resolve(SpacingToken::Lg), 16.0);
    }
}
