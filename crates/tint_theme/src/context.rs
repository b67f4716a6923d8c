//! Theme context: mode state, persistence, and theme selection.
//!
//! The context owns the resolved [`ThemePair`] and the current
//! [`ThemeMode`]. It is created once per application root and passed down
//! explicitly; the installed global handle exists only as an ergonomic
//! shortcut for widget code.
//!
//! Mode switching selects one of the two precomputed themes. It never
//! re-resolves.

use crate::store::ModeStore;
use crate::theme::{ColorScheme, Theme, ThemePair};
use std::sync::{Arc, OnceLock, RwLock};

/// User-selected theme mode. `Auto` follows the platform-reported scheme.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    /// The persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Parse a persisted value. Anything but the three literals is treated
    /// as absent, so a corrupt store entry degrades to `Auto`.
    pub fn from_persisted(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Global installed context (optional ergonomic handle)
static CONTEXT: OnceLock<Arc<ThemeContext>> = OnceLock::new();

/// Application-level theme state.
pub struct ThemeContext {
    pair: ThemePair,
    mode: RwLock<ThemeMode>,
    system: RwLock<ColorScheme>,
    store: Arc<dyn ModeStore>,
}

impl ThemeContext {
    /// Create a context and load the persisted mode once.
    ///
    /// Load failures and unrecognized stored values both fall back to
    /// `Auto`; errors are logged and swallowed.
    pub async fn load(
        pair: ThemePair,
        store: Arc<dyn ModeStore>,
        system: ColorScheme,
    ) -> Arc<Self> {
        let mode = match store.load().await {
            Ok(Some(raw)) => match ThemeMode::from_persisted(&raw) {
                Some(mode) => mode,
                None => {
                    tracing::debug!(%raw, "ignoring unrecognized persisted theme mode");
                    ThemeMode::Auto
                }
            },
            Ok(None) => ThemeMode::Auto,
            Err(err) => {
                tracing::warn!(%err, "failed to load theme mode preference");
                ThemeMode::Auto
            }
        };
        Arc::new(Self {
            pair,
            mode: RwLock::new(mode),
            system: RwLock::new(system),
            store,
        })
    }

    /// Create a context without touching the store (mode starts at `Auto`).
    pub fn new(pair: ThemePair, store: Arc<dyn ModeStore>, system: ColorScheme) -> Arc<Self> {
        Arc::new(Self {
            pair,
            mode: RwLock::new(ThemeMode::Auto),
            system: RwLock::new(system),
            store,
        })
    }

    /// The resolved pair this context selects from.
    pub fn pair(&self) -> &ThemePair {
        &self.pair
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read().unwrap()
    }

    /// Set the mode and persist it fire-and-forget. Persistence errors are
    /// logged and swallowed; in-memory state is authoritative either way.
    pub fn set_mode(&self, mode: ThemeMode) {
        {
            let mut current = self.mode.write().unwrap();
            if *current == mode {
                return;
            }
            tracing::debug!(from = ?*current, to = ?mode, "switching theme mode");
            *current = mode;
        }

        let store = Arc::clone(&self.store);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = store.save(mode.as_str()).await {
                        tracing::warn!(%err, "failed to persist theme mode");
                    }
                });
            }
            Err(_) => {
                tracing::warn!("no async runtime available, theme mode not persisted");
            }
        }
    }

    /// The scheme actually rendered: explicit modes map directly, `Auto`
    /// follows the platform-reported scheme.
    pub fn effective_scheme(&self) -> ColorScheme {
        match self.mode() {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::Auto => self.system_scheme(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.effective_scheme().is_dark()
    }

    /// The theme for the effective scheme.
    pub fn theme(&self) -> &Theme {
        self.pair.for_scheme(self.effective_scheme())
    }

    /// Toggle light/dark. From `Auto` this toggles away from the currently
    /// effective scheme, not in a fixed direction.
    pub fn toggle(&self) {
        let target = match self.effective_scheme().toggle() {
            ColorScheme::Light => ThemeMode::Light,
            ColorScheme::Dark => ThemeMode::Dark,
        };
        self.set_mode(target);
    }

    /// Switch back to following the platform scheme.
    pub fn follow_system(&self) {
        self.set_mode(ThemeMode::Auto);
    }

    pub fn is_following_system(&self) -> bool {
        self.mode() == ThemeMode::Auto
    }

    pub fn system_scheme(&self) -> ColorScheme {
        *self.system.read().unwrap()
    }

    /// Feed a platform scheme change into the context. Only affects the
    /// rendered theme while mode is `Auto`.
    pub fn system_scheme_changed(&self, scheme: ColorScheme) {
        let mut current = self.system.write().unwrap();
        if *current != scheme {
            tracing::debug!(?scheme, "platform color scheme changed");
            *current = scheme;
        }
    }

    /// Install a context as the process-wide handle. The first install
    /// wins; later calls are ignored.
    pub fn install(context: Arc<Self>) {
        let _ = CONTEXT.set(context);
    }

    /// The installed context.
    ///
    /// # Panics
    ///
    /// Panics when called before [`ThemeContext::install`] — a usage
    /// precondition meant to surface during development.
    pub fn current() -> Arc<Self> {
        CONTEXT
            .get()
            .cloned()
            .expect("ThemeContext not installed. Call ThemeContext::install() at app startup.")
    }

    /// The installed context, or `None` before installation.
    pub fn try_current() -> Option<Arc<Self>> {
        CONTEXT.get().cloned()
    }
}
