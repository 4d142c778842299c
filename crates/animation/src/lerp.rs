//! The [`Animatable`] trait for types that support interpolation.

/// A type that can be linearly interpolated.
///
/// `t = 0.0` returns `self` and `t = 1.0` returns `target`. Values outside
/// `[0.0, 1.0]` extrapolate along the same line; spring curves rely on this
/// to overshoot their target.
///
/// # Example
///
/// ```
/// use butter_animation::Animatable;
///
/// assert_eq!(0.0f32.lerp(&100.0, 0.5), 50.0);
/// assert_eq!(0.0f32.lerp(&100.0, 1.1), 110.0);
/// ```
pub trait Animatable: Clone {
	/// Interpolate between `self` and `target` at progress `t`.
	fn lerp(&self, target: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		self + (target - self) * t
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn f32_lerp() {
		assert_eq!(0.0f32.lerp(&100.0, 0.0), 0.0);
		assert_eq!(0.0f32.lerp(&100.0, 0.5), 50.0);
		assert_eq!(0.0f32.lerp(&100.0, 1.0), 100.0);
	}

	#[test]
	fn f32_lerp_extrapolates() {
		assert_eq!(10.0f32.lerp(&-10.0, 1.5), -20.0);
		assert_eq!(0.0f32.lerp(&100.0, -0.25), -25.0);
	}
}
