//! Easing functions for animation curves.
//!
//! Easing functions map linear progress (0.0 to 1.0) onto curved progress.

/// Easing function for controlling the pace of a transition.
///
/// Transforms linear progress `t ∈ [0.0, 1.0]` into curved progress with the
/// same endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
	/// Constant speed.
	Linear,

	/// Quadratic ease-in, `t²`.
	EaseIn,

	/// Quadratic ease-out, `1 - (1-t)²`.
	EaseOut,

	/// Quadratic ease-in-out: slow at both ends.
	///
	/// Default pace for overlay transitions.
	#[default]
	EaseInOut,
}

impl Easing {
	/// Apply the easing function to linear progress.
	///
	/// Input `t` is clamped to `[0.0, 1.0]`.
	#[inline]
	pub fn apply(self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::EaseIn => ease_in_quad(t),
			Easing::EaseOut => ease_out_quad(t),
			Easing::EaseInOut => ease_in_out_quad(t),
		}
	}
}

/// Quadratic ease-in: `t²`
#[inline]
fn ease_in_quad(t: f32) -> f32 {
	t * t
}

/// Quadratic ease-out: `1 - (1-t)²`
#[inline]
fn ease_out_quad(t: f32) -> f32 {
	1.0 - (1.0 - t).powi(2)
}

/// Quadratic ease-in-out.
#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
	if t < 0.5 {
		2.0 * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	const ALL: [Easing; 4] = [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut];

	#[test]
	fn default_is_ease_in_out() {
		assert_eq!(Easing::default(), Easing::EaseInOut);
	}

	#[rstest]
	#[case::ease_out(Easing::EaseOut, true)]
	#[case::ease_in(Easing::EaseIn, false)]
	fn midpoint_relative_to_linear(#[case] easing: Easing, #[case] ahead: bool) {
		let eased = easing.apply(0.5);
		assert_eq!(eased > 0.5, ahead, "{easing:?} at t=0.5 gave {eased}");
	}

	#[test]
	fn ease_in_out_is_symmetric() {
		assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
		let early = Easing::EaseInOut.apply(0.2);
		let late = Easing::EaseInOut.apply(0.8);
		assert!((early + late - 1.0).abs() < 1e-6, "{early} + {late}");
	}

	#[test]
	fn endpoints_are_fixed() {
		for easing in ALL {
			assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at t=0.0");
			assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at t=1.0");
		}
	}

	#[test]
	fn clamps_input() {
		assert_eq!(Easing::Linear.apply(-0.5), 0.0);
		assert_eq!(Easing::Linear.apply(1.5), 1.0);
	}
}
