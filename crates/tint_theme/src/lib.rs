//! Tint theming: design tokens, theme resolution, and runtime mode state.
//!
//! # Overview
//!
//! A theme is a complete set of semantic colors plus component styling,
//! always materialized as a light/dark [`ThemePair`]. Apps customize it
//! through one of two entry points:
//!
//! - [`create_theme`] — convenience resolution from a partial
//!   [`ThemeConfig`]: a palette shortcut, explicit per-mode color maps, or
//!   component overrides shared by both modes.
//! - [`define_theme`] — full manual control, one [`DefineModeConfig`] per
//!   mode with mode-local fallbacks.
//!
//! Resolution never fails: missing values fall back to built-in defaults
//! and malformed values are ignored with a log line. The resolved pair is
//! held by a [`ThemeContext`], which tracks the user-selected
//! [`ThemeMode`], persists it through a [`ModeStore`], and follows the
//! platform color scheme while in `Auto`.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tint_theme::{create_theme, ColorScheme, MemoryStore, ThemeConfig, ThemeContext};
//!
//! # async fn start() {
//! let config = ThemeConfig::from_toml_str("primary_color = \"orange\"").unwrap();
//! let pair = create_theme(Some(&config));
//! let context = ThemeContext::load(pair, Arc::new(MemoryStore::new()), ColorScheme::Light).await;
//! ThemeContext::install(context);
//!
//! let theme = ThemeContext::current();
//! let primary = theme.theme().primary;
//! # let _ = primary;
//! # }
//! ```

pub mod components;
pub mod config;
pub mod context;
pub mod platform;
pub mod resolve;
pub mod store;
pub mod theme;
pub mod tokens;

pub use components::{
    ComponentOverrides, ComponentThemes, InputTheme, Overlay, PartialTextStyle, TextTheme,
};
pub use config::{DefineModeConfig, DefineThemeConfig, ThemeColors, ThemeConfig};
pub use context::{ThemeContext, ThemeMode};
pub use platform::{FixedScheme, SchemeSource, SharedScheme};
pub use resolve::{create_theme, define_theme};
pub use store::{FileStore, MemoryStore, ModeStore, StoreError, THEME_MODE_KEY};
pub use theme::{ColorRole, ColorScheme, Theme, ThemePair, DEFAULT_DARK, DEFAULT_LIGHT};
pub use tint_core::Color;
pub use tokens::{
    AnimationTokens, Breakpoint, BreakpointTokens, DurationToken, DurationTokens, Easing,
    FontSizeToken, FontSizeTokens, FontWeight, LetterSpacingTokens, LineHeightTokens, NeutralScale,
    OpacityToken, OpacityTokens, Palette, PaletteName, RadiusToken, RadiusTokens, Shadow,
    ShadowToken, ShadowTokens, SpacingToken, SpacingTokens, SpacingValue, StateOpacityTokens,
    StatusColor, TextStyle, TypographyTokens, ZIndexTokens, ZLayer,
};
