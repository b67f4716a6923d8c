//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Color palettes
//! - Typography (sizes, weights, variants)
//! - Spacing (margins, padding)
//! - Border radii
//! - Shadows
//! - Opacity
//! - Breakpoints
//! - Animation durations and easings
//! - Z-index layers
//!
//! All scales are immutable data. Lookups never fail: by-name accessors fall
//! back to a documented default (usually `md`) because token lookups happen
//! inside rendering paths.

mod animation;
mod breakpoint;
mod opacity;
pub mod palette;
mod radius;
mod shadow;
mod spacing;
mod typography;
mod z_index;

pub use animation::*;
pub use breakpoint::*;
pub use opacity::*;
pub use palette::{NeutralScale, Palette, PaletteName, StatusColor};
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
pub use z_index::*;
