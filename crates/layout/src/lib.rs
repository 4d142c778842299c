//! Geometry and anchor constraints for overlays.
//!
//! Coordinates use the top-left corner of the host as origin, with x growing
//! to the right and y growing downward. Units are logical points (`f32`).
//!
//! An overlay's placement is described by a [`ConstraintSet`]: a handful of
//! relations between one of the overlay's [`Attribute`]s and either a
//! [`HostAnchor`] or a fixed value. [`ConstraintSet::resolve`] turns those
//! relations plus the overlay's fitted size into a frame.

/// Anchor constraints and their solver.
pub mod constraint;
/// Sizes and rectangles.
pub mod geometry;

pub use constraint::{Attribute, Constraint, ConstraintSet, HostAnchor};
pub use geometry::{Rect, Size};

#[cfg(test)]
mod tests;
