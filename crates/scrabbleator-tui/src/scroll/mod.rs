//! Smooth scrolling for the word list
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `config` - duration helpers over the core `ScrollConfig`
//! - `animation` - the animator the word list renders through
//!
//! The animator only moves the viewport. Whether the list should follow the
//! reveal is decided by the core scroll coordinator.

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
