//! Animation primitives for overlay transitions.
//!
//! Provides the [`Animatable`] trait for values that can be interpolated,
//! [`Easing`] and [`Spring`] response curves combined into a [`Curve`], and
//! [`Tween`] for animations driven by an external clock.
//!
//! Time is never read from the system here. A tween is positioned on the
//! timeline of whoever drives it (usually a UI loop), and sampled with
//! [`Tween::value_at`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use butter_animation::{Curve, Easing, Tween};
//!
//! let tween = Tween::new(0.0f32, 100.0f32, Duration::from_millis(500))
//!     .with_curve(Curve::eased(Easing::EaseOut));
//!
//! assert_eq!(tween.value_at(Duration::ZERO), 0.0);
//! assert_eq!(tween.value_at(Duration::from_millis(500)), 100.0);
//! ```

mod curve;
mod easing;
mod lerp;
mod spring;
mod tween;

pub use curve::Curve;
pub use easing::Easing;
pub use lerp::Animatable;
pub use spring::Spring;
pub use tween::Tween;
