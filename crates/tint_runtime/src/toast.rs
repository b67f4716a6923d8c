//! Toast notifications with auto-dismiss.
//!
//! The manager owns the active toast list; each shown toast gets its own
//! dismiss timer. Widget layers subscribe by polling [`ToastManager::active`]
//! on their redraw tick, or by wrapping the manager in their own signal type.

use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tint_core::Color;
use tint_theme::Theme;
use tokio::task::JoinHandle;

/// Default auto-dismiss delay.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Handle to a shown toast, usable to dismiss it early.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct ToastId(u64);

/// Toast severity. Drives the accent color, nothing else.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// The theme color a toast of this kind is accented with.
    pub fn accent(self, theme: &Theme) -> Color {
        match self {
            Self::Info => theme.info,
            Self::Success => theme.success,
            Self::Warning => theme.warning,
            Self::Error => theme.error,
        }
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    toasts: Vec<Toast>,
    timers: FxHashMap<ToastId, JoinHandle<()>>,
}

impl Inner {
    fn remove(&mut self, id: ToastId) -> bool {
        if let Some(timer) = self.timers.remove(&id) {
            timer.abort();
        }
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

/// Owns active toasts and their dismiss timers.
///
/// Cloning is cheap and shares the toast list. Timers only hold a weak
/// reference, so dropping the last manager cancels every pending dismiss.
#[derive(Clone, Default)]
pub struct ToastManager {
    inner: Arc<Mutex<Inner>>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast with the default duration.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.show_for(message, kind, DEFAULT_TOAST_DURATION)
    }

    /// Show a toast that stays until dismissed explicitly.
    pub fn show_sticky(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.show_for(message, kind, Duration::ZERO)
    }

    /// Show a toast that auto-dismisses after `duration`. A zero duration
    /// means sticky: no timer is scheduled.
    pub fn show_for(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> ToastId {
        let message = message.into();
        let mut inner = self.inner.lock().unwrap();
        let id = ToastId(inner.next_id);
        inner.next_id += 1;
        inner.toasts.push(Toast {
            id,
            message,
            kind,
        });

        if duration.is_zero() {
            return id;
        }

        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let timer = handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    if let Some(inner) = weak.upgrade() {
                        let mut inner = inner.lock().unwrap();
                        inner.timers.remove(&id);
                        inner.toasts.retain(|toast| toast.id != id);
                    }
                });
                inner.timers.insert(id, timer);
            }
            Err(_) => {
                tracing::warn!("no async runtime available, toast will not auto-dismiss");
            }
        }

        id
    }

    /// Dismiss a toast early. Returns `false` when it was already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.inner.lock().unwrap().remove(id)
    }

    /// Dismiss everything at once.
    pub fn dismiss_all(&self) {
        let mut inner = self.inner.lock().unwrap();
        for (_, timer) in inner.timers.drain() {
            timer.abort();
        }
        inner.toasts.clear();
    }

    /// Snapshot of the toasts currently on screen, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.inner.lock().unwrap().toasts.clone()
    }
}

impl Drop for ToastManager {
    fn drop(&mut self) {
        // last manager going away cancels all pending timers
        if Arc::strong_count(&self.inner) == 1 {
            let mut inner = self.inner.lock().unwrap();
            for (_, timer) in inner.timers.drain() {
                timer.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_auto_dismisses_after_duration() {
        let toasts = ToastManager::new();
        toasts.show("saved", ToastKind::Success);
        assert_eq!(toasts.active().len(), 1);

        tokio::time::sleep(DEFAULT_TOAST_DURATION + Duration::from_millis(1)).await;
        assert!(toasts.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_cancels_the_timer() {
        let toasts = ToastManager::new();
        let id = toasts.show_for("working...", ToastKind::Info, Duration::from_millis(100));
        assert!(toasts.dismiss(id));
        assert!(!toasts.dismiss(id));
        assert!(toasts.active().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(toasts.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn sticky_toast_outlives_the_clock() {
        let toasts = ToastManager::new();
        let id = toasts.show_sticky("update available", ToastKind::Info);
        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(toasts.active().len(), 1);
        assert!(toasts.dismiss(id));
        assert!(toasts.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_stack_in_show_order() {
        let toasts = ToastManager::new();
        toasts.show_for("first", ToastKind::Info, Duration::from_millis(50));
        toasts.show_for("second", ToastKind::Error, Duration::from_millis(500));

        let active = toasts.active();
        assert_eq!(active[0].message, "first");
        assert_eq!(active[1].message, "second");

        tokio::time::sleep(Duration::from_millis(100)).await;
        let active = toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "second");
    }
}
