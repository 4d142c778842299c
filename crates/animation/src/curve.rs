//! Timing curves composed from an easing and an optional spring.

use crate::easing::Easing;
use crate::spring::Spring;

/// Maps linear progress onto the displacement used to interpolate a tween.
///
/// Progress is first paced by the easing, then fed through the spring when
/// one is set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Curve {
	/// Pacing applied to linear progress.
	pub easing: Easing,
	/// Spring response applied after easing.
	pub spring: Option<Spring>,
}

impl Curve {
	/// Linear progress with no spring.
	pub const LINEAR: Self = Self {
		easing: Easing::Linear,
		spring: None,
	};

	/// A curve with the given easing and no spring.
	pub const fn eased(easing: Easing) -> Self {
		Self {
			easing,
			spring: None,
		}
	}

	/// A curve with the given easing followed by a spring response.
	pub const fn sprung(easing: Easing, spring: Spring) -> Self {
		Self {
			easing,
			spring: Some(spring),
		}
	}

	/// Returns the displacement for linear progress `t`.
	#[inline]
	pub fn apply(self, t: f32) -> f32 {
		let eased = self.easing.apply(t);
		match self.spring {
			Some(spring) => spring.apply(eased),
			None => eased,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn linear_curve_is_identity() {
		assert_eq!(Curve::LINEAR.apply(0.25), 0.25);
	}

	#[test]
	fn sprung_curve_keeps_endpoints() {
		let curve = Curve::sprung(Easing::EaseInOut, Spring::default());
		assert_eq!(curve.apply(0.0), 0.0);
		assert_eq!(curve.apply(1.0), 1.0);
	}

	#[test]
	fn spring_is_applied_after_easing() {
		let spring = Spring::default();
		let curve = Curve::sprung(Easing::EaseIn, spring);
		let t = 0.4;
		assert_eq!(curve.apply(t), spring.apply(Easing::EaseIn.apply(t)));
	}
}
