//! Animation tokens: durations and easing curves.

use std::time::Duration;

/// Semantic duration token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    /// Micro interactions
    Instant,
    /// Hover, ripple
    Fast,
    /// Most transitions
    Normal,
    /// Modals, drawers
    Moderate,
    /// Complex transitions
    Slow,
    Slower,
}

/// Animation durations
#[derive(Clone, Debug, PartialEq)]
pub struct DurationTokens {
    pub instant: Duration,
    pub fast: Duration,
    pub normal: Duration,
    pub moderate: Duration,
    pub slow: Duration,
    pub slower: Duration,
}

impl DurationTokens {
    pub fn get(&self, token: DurationToken) -> Duration {
        match token {
            DurationToken::Instant => self.instant,
            DurationToken::Fast => self.fast,
            DurationToken::Normal => self.normal,
            DurationToken::Moderate => self.moderate,
            DurationToken::Slow => self.slow,
            DurationToken::Slower => self.slower,
        }
    }
}

impl Default for DurationTokens {
    fn default() -> Self {
        Self {
            instant: Duration::from_millis(75),
            fast: Duration::from_millis(150),
            normal: Duration::from_millis(250),
            moderate: Duration::from_millis(350),
            slow: Duration::from_millis(500),
            slower: Duration::from_millis(700),
        }
    }
}

/// A cubic-bezier easing curve (x1, y1, x2, y2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing(pub [f32; 4]);

impl Easing {
    pub const LINEAR: Easing = Easing([0.0, 0.0, 1.0, 1.0]);
    pub const EASE: Easing = Easing([0.25, 0.1, 0.25, 1.0]);
    pub const EASE_IN: Easing = Easing([0.42, 0.0, 1.0, 1.0]);
    pub const EASE_OUT: Easing = Easing([0.0, 0.0, 0.58, 1.0]);
    pub const EASE_IN_OUT: Easing = Easing([0.42, 0.0, 0.58, 1.0]);
    /// Slight overshoot for emphasis
    pub const SPRING: Easing = Easing([0.175, 0.885, 0.32, 1.275]);
}

/// Complete animation token set
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationTokens {
    pub durations: DurationTokens,
}
