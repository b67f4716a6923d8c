//! Core primitives shared across the Tint UI toolkit.
//!
//! This crate holds the types every other Tint crate agrees on, most
//! importantly [`Color`]. Keeping them in a leaf crate lets the theme
//! system, runtime utilities, and component crates depend on the same
//! color representation without pulling in each other.

mod color;

pub use color::Color;
