//! Damped spring response over normalized time.

/// Natural log of the settle ratio: the spring envelope decays to 0.1% of
/// its initial amplitude by the end of the transition.
const SETTLE_LOG: f32 = 6.907_755;

/// A damped harmonic spring mapped onto normalized progress.
///
/// The spring's stiffness is derived from `damping` so that motion settles
/// inside the transition's duration; the duration itself is owned by the
/// tween. Under-damped springs (`damping < 1.0`) overshoot the target before
/// settling, which is why [`Spring::apply`] may return values above `1.0`.
///
/// `velocity` is the initial speed expressed in total distances per unit of
/// normalized time, so `1.0` means the value starts moving as fast as a
/// linear transition would.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	/// Damping ratio. Values below `1.0` oscillate, `1.0` and above do not.
	pub damping: f32,
	/// Initial velocity in total distances per normalized time unit.
	pub velocity: f32,
}

impl Default for Spring {
	fn default() -> Self {
		Self {
			damping: 0.6,
			velocity: 1.0,
		}
	}
}

impl Spring {
	/// Creates a spring with the given damping ratio and initial velocity.
	pub const fn new(damping: f32, velocity: f32) -> Self {
		Self { damping, velocity }
	}

	/// Samples the spring displacement at normalized time `t`.
	///
	/// `t` is clamped to `[0.0, 1.0]`. The result is exactly `0.0` at the
	/// start and exactly `1.0` at the end; in between it may overshoot.
	pub fn apply(self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		if t >= 1.0 {
			return 1.0;
		}

		let zeta = self.damping.max(f32::EPSILON);
		let omega = SETTLE_LOG / zeta.min(1.0);

		if zeta < 1.0 {
			let damped = omega * (1.0 - zeta * zeta).sqrt();
			let envelope = (-zeta * omega * t).exp();
			let sine_weight = (zeta * omega - self.velocity) / damped;
			1.0 - envelope * ((damped * t).cos() + sine_weight * (damped * t).sin())
		} else {
			let envelope = (-omega * t).exp();
			1.0 - envelope * (1.0 + (omega - self.velocity) * t)
		}
	}
}
