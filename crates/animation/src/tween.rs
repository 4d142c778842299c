//! Clock-driven animation tweening.

use std::time::Duration;

use crate::curve::Curve;
use crate::lerp::Animatable;

/// A tween that animates a value from `start` to `end` on an external clock.
///
/// The tween does not read wall time. It is anchored at `start_at` on the
/// driver's timeline, waits `delay`, then runs for `duration`. Sample it with
/// [`Tween::value_at`] using the same timeline.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use butter_animation::Tween;
///
/// let tween = Tween::new(0.0f32, 10.0f32, Duration::from_secs(1))
///     .starting_at(Duration::from_secs(5))
///     .with_delay(Duration::from_millis(500));
///
/// assert_eq!(tween.value_at(Duration::from_secs(5)), 0.0);
/// assert_eq!(tween.value_at(Duration::from_secs(6)), 5.0);
/// assert!(tween.is_complete_at(tween.end_time()));
/// ```
#[derive(Debug, Clone)]
pub struct Tween<T: Animatable> {
	/// Starting value.
	pub start: T,
	/// Target value.
	pub end: T,
	/// Position on the driver's timeline where the tween was created.
	pub start_at: Duration,
	/// Wait before the value starts moving.
	pub delay: Duration,
	/// Length of the moving part of the tween.
	pub duration: Duration,
	/// Timing curve applied to linear progress.
	pub curve: Curve,
}

impl<T: Animatable> Tween<T> {
	/// Creates a linear tween anchored at time zero with no delay.
	pub fn new(start: T, end: T, duration: Duration) -> Self {
		Self {
			start,
			end,
			start_at: Duration::ZERO,
			delay: Duration::ZERO,
			duration,
			curve: Curve::LINEAR,
		}
	}

	/// Anchors the tween at `now` on the driver's timeline.
	#[must_use]
	pub fn starting_at(mut self, now: Duration) -> Self {
		self.start_at = now;
		self
	}

	/// Sets the wait before motion begins.
	#[must_use]
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Sets the timing curve.
	#[must_use]
	pub fn with_curve(mut self, curve: Curve) -> Self {
		self.curve = curve;
		self
	}

	/// Timeline position at which the tween reaches its end value.
	pub fn end_time(&self) -> Duration {
		self.start_at.saturating_add(self.delay).saturating_add(self.duration)
	}

	/// Returns linear progress (0.0 to 1.0) at `now`, without the curve.
	#[inline]
	pub fn progress_at(&self, now: Duration) -> f32 {
		let moving_since = self.start_at.saturating_add(self.delay);
		if now < moving_since {
			return 0.0;
		}
		if self.duration.is_zero() {
			return 1.0;
		}
		let elapsed = (now - moving_since).as_secs_f32();
		(elapsed / self.duration.as_secs_f32()).min(1.0)
	}

	/// Returns the curved progress at `now`.
	///
	/// May leave `[0.0, 1.0]` while a spring overshoots.
	#[inline]
	pub fn displacement_at(&self, now: Duration) -> f32 {
		self.curve.apply(self.progress_at(now))
	}

	/// Returns the interpolated value at `now`.
	#[inline]
	pub fn value_at(&self, now: Duration) -> T {
		self.start.lerp(&self.end, self.displacement_at(now))
	}

	/// Returns true once the tween has reached its end value.
	#[inline]
	pub fn is_complete_at(&self, now: Duration) -> bool {
		now >= self.end_time()
	}
}
