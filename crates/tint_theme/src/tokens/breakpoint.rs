//! Responsive breakpoint tokens.

/// Breakpoint steps, based on common device widths.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Small phones (< 375)
    Xs,
    /// Standard phones (< 480)
    Sm,
    /// Large phones / small tablets (< 768)
    Md,
    /// Tablets (< 1024)
    Lg,
    /// Small desktop (< 1280)
    Xl,
    /// Large desktop (>= 1280)
    Xxl,
}

/// Breakpoint thresholds in logical pixels
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl BreakpointTokens {
    pub fn get(&self, breakpoint: Breakpoint) -> f32 {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// Classify a window width into its breakpoint.
    pub fn for_width(&self, width: f32) -> Breakpoint {
        if width < self.xs {
            Breakpoint::Xs
        } else if width < self.sm {
            Breakpoint::Sm
        } else if width < self.md {
            Breakpoint::Md
        } else if width < self.lg {
            Breakpoint::Lg
        } else if width < self.xl {
            Breakpoint::Xl
        } else {
            Breakpoint::Xxl
        }
    }

    /// True when `width` is at or above the breakpoint threshold.
    pub fn is_up(&self, breakpoint: Breakpoint, width: f32) -> bool {
        width >= self.get(breakpoint)
    }

    /// True when `width` is below the breakpoint threshold.
    pub fn is_down(&self, breakpoint: Breakpoint, width: f32) -> bool {
        width < self.get(breakpoint)
    }
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self {
            xs: 375.0,
            sm: 480.0,
            md: 768.0,
            lg: 1024.0,
            xl: 1280.0,
            xxl: 1536.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_on_threshold_classifies_upward() {
        let b = BreakpointTokens::default();
        assert_eq!(b.for_width(767.9), Breakpoint::Md);
        assert_eq!(b.for_width(768.0), Breakpoint::Lg);
        assert_eq!(b.for_width(320.0), Breakpoint::Xs);
        assert_eq!(b.for_width(2000.0), Breakpoint::Xxl);
    }

    #[test]
    fn up_and_down_are_complements() {
        let b = BreakpointTokens::default();
        assert!(b.is_up(Breakpoint::Md, 800.0));
        assert!(!b.is_down(Breakpoint::Md, 800.0));
        assert!(b.is_down(Breakpoint::Md, 700.0));
    }
}
