//! Platform color-scheme boundary.
//!
//! The OS-reported light/dark preference is an opaque external signal. Tint
//! only defines the seam: platform extension crates read the real value and
//! feed changes into [`crate::ThemeContext::system_scheme_changed`].

use crate::theme::ColorScheme;
use std::sync::{Arc, RwLock};

/// Source of the platform-reported color scheme.
pub trait SchemeSource: Send + Sync {
    fn current(&self) -> ColorScheme;
}

/// A scheme source that always reports the same value. Useful for tests
/// and platforms without a dark-mode signal.
#[derive(Clone, Copy, Debug)]
pub struct FixedScheme(pub ColorScheme);

impl SchemeSource for FixedScheme {
    fn current(&self) -> ColorScheme {
        self.0
    }
}

/// A scheme cell the platform glue writes into and widgets read from.
#[derive(Clone, Debug)]
pub struct SharedScheme(Arc<RwLock<ColorScheme>>);

impl SharedScheme {
    pub fn new(initial: ColorScheme) -> Self {
        Self(Arc::new(RwLock::new(initial)))
    }

    pub fn set(&self, scheme: ColorScheme) {
        *self.0.write().unwrap() = scheme;
    }
}

impl SchemeSource for SharedScheme {
    fn current(&self) -> ColorScheme {
        *self.0.read().unwrap()
    }
}
