//! Runtime UI utilities for Tint apps.
//!
//! Small async building blocks that UI code reaches for constantly:
//!
//! - [`ToastManager`] — transient notifications with auto-dismiss timers,
//!   accent-colored from the active theme
//! - [`Debouncer`] — trailing-edge debouncing for noisy event streams
//! - [`LatestTask`] — a latest-wins slot for cancellable async work
//!
//! All of them assume a tokio runtime is running; the synchronous entry
//! points spawn onto the current runtime handle.

pub mod debounce;
pub mod task;
pub mod toast;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};
pub use task::LatestTask;
pub use toast::{Toast, ToastId, ToastKind, ToastManager, DEFAULT_TOAST_DURATION};
