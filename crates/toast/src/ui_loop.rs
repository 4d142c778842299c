//! Serial UI execution context.
//!
//! [`UiLoop`] owns a monotonic clock, the animations in flight and pending
//! one-shot timers. Nothing advances on its own: the owner of the host calls
//! [`UiLoop::advance`] once per frame, or hands the loop to
//! [`UiLoop::run_until_idle`] to be driven by a tokio interval.
//!
//! Events due inside one `advance` step run in timeline order, each with the
//! clock set to its own due time. Callbacks run with no internal borrow held,
//! so they may schedule timers, start animations or dismiss overlays.

use core::cell::RefCell;
use core::fmt;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use butter_animation::{Animatable, Tween};

type TimerFn = Box<dyn FnOnce(&UiLoop)>;
type FrameFn = Rc<RefCell<dyn FnMut(Duration)>>;

/// Identifies a pending one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
	deadline: Duration,
	seq: u64,
}

impl TimerId {
	/// Loop time at which the timer fires.
	pub fn deadline(self) -> Duration {
		self.deadline
	}
}

struct Animation {
	seq: u64,
	end_time: Duration,
	frame: FrameFn,
	complete: TimerFn,
}

#[derive(Default)]
struct LoopState {
	now: Duration,
	next_seq: u64,
	timers: BTreeMap<TimerId, TimerFn>,
	animations: Vec<Animation>,
}

impl LoopState {
	fn seq(&mut self) -> u64 {
		let seq = self.next_seq;
		self.next_seq += 1;
		seq
	}

	/// Earliest event due at or before `until`. Completions win ties with
	/// timers so a timer scheduled for "now" by a completion runs after it.
	fn next_due(&self, until: Duration) -> Option<Due> {
		let animation = self
			.animations
			.iter()
			.filter(|a| a.end_time <= until)
			.min_by_key(|a| (a.end_time, a.seq))
			.map(|a| (a.end_time, a.seq));
		let timer = self.timers.keys().next().copied().filter(|id| id.deadline <= until);

		match (animation, timer) {
			(Some((end, seq)), Some(timer)) if end <= timer.deadline => Some(Due::Completion(end, seq)),
			(_, Some(timer)) => Some(Due::Timer(timer)),
			(Some((end, seq)), None) => Some(Due::Completion(end, seq)),
			(None, None) => None,
		}
	}
}

enum Due {
	Completion(Duration, u64),
	Timer(TimerId),
}

/// Cloneable handle to a single-threaded UI execution context.
///
/// Clones share the same clock, animations and timers.
#[derive(Clone, Default)]
pub struct UiLoop {
	state: Rc<RefCell<LoopState>>,
}

impl UiLoop {
	pub fn new() -> Self {
		Self::default()
	}

	/// Non-owning handle for callbacks stored inside the loop's own timers
	/// or overlays.
	pub fn downgrade(&self) -> WeakUiLoop {
		WeakUiLoop(Rc::downgrade(&self.state))
	}

	/// Current position of the loop's clock.
	pub fn now(&self) -> Duration {
		self.state.borrow().now
	}

	/// Runs `f` once, `delay` from now.
	pub fn schedule_after(&self, delay: Duration, f: impl FnOnce(&UiLoop) + 'static) -> TimerId {
		let mut state = self.state.borrow_mut();
		let id = TimerId {
			deadline: state.now.saturating_add(delay),
			seq: state.seq(),
		};
		state.timers.insert(id, Box::new(f));
		tracing::trace!(deadline_ms = id.deadline.as_millis() as u64, "ui_loop.timer.schedule");
		id
	}

	/// Cancels a pending timer. Returns false if it already ran or was cancelled.
	pub fn cancel(&self, id: TimerId) -> bool {
		let cancelled = self.state.borrow_mut().timers.remove(&id).is_some();
		tracing::trace!(deadline_ms = id.deadline.as_millis() as u64, cancelled, "ui_loop.timer.cancel");
		cancelled
	}

	/// Starts a tween anchored at the current time.
	///
	/// `on_frame` receives the tween's value on every advance while it runs,
	/// and exactly `tween.end` as its last value. `on_complete` runs right
	/// after that final frame.
	pub fn animate<T>(&self, tween: Tween<T>, mut on_frame: impl FnMut(T) + 'static, on_complete: impl FnOnce(&UiLoop) + 'static)
	where
		T: Animatable + 'static,
	{
		let mut state = self.state.borrow_mut();
		let tween = tween.starting_at(state.now);
		let end_time = tween.end_time();
		let frame = move |now: Duration| {
			if tween.is_complete_at(now) {
				on_frame(tween.end.clone());
			} else {
				on_frame(tween.value_at(now));
			}
		};
		let seq = state.seq();
		state.animations.push(Animation {
			seq,
			end_time,
			frame: Rc::new(RefCell::new(frame)),
			complete: Box::new(on_complete),
		});
		tracing::trace!(end_ms = end_time.as_millis() as u64, "ui_loop.animation.start");
	}

	/// Moves the clock forward by `delta`, running every event that falls due.
	pub fn advance(&self, delta: Duration) {
		let target = self.now().saturating_add(delta);

		loop {
			let due = self.state.borrow().next_due(target);
			match due {
				Some(Due::Completion(at, seq)) => {
					let animation = {
						let mut state = self.state.borrow_mut();
						state.now = at;
						let index = state.animations.iter().position(|a| a.seq == seq);
						index.map(|index| state.animations.remove(index))
					};
					if let Some(animation) = animation {
						(&mut *animation.frame.borrow_mut())(at);
						(animation.complete)(self);
					}
				}
				Some(Due::Timer(id)) => {
					let timer = {
						let mut state = self.state.borrow_mut();
						state.now = id.deadline;
						state.timers.remove(&id)
					};
					if let Some(timer) = timer {
						timer(self);
					}
				}
				None => break,
			}
		}

		let frames: Vec<FrameFn> = {
			let mut state = self.state.borrow_mut();
			state.now = target;
			state.animations.iter().map(|a| Rc::clone(&a.frame)).collect()
		};
		for frame in frames {
			(&mut *frame.borrow_mut())(target);
		}
	}

	/// Advances by `frame` steps until `total` has elapsed. The last step is
	/// shortened to land exactly on `total`.
	pub fn run_frames(&self, total: Duration, frame: Duration) {
		if frame.is_zero() {
			self.advance(total);
			return;
		}
		let mut elapsed = Duration::ZERO;
		while elapsed < total {
			let step = frame.min(total - elapsed);
			self.advance(step);
			elapsed += step;
		}
	}

	/// Whether no animation or timer is pending.
	pub fn is_idle(&self) -> bool {
		let state = self.state.borrow();
		state.animations.is_empty() && state.timers.is_empty()
	}

	pub fn active_animations(&self) -> usize {
		self.state.borrow().animations.len()
	}

	pub fn pending_timers(&self) -> usize {
		self.state.borrow().timers.len()
	}

	/// Drives the loop from a tokio interval until it is idle.
	///
	/// Each tick advances the clock by the real time elapsed since the
	/// previous tick, then calls `after_frame` with the new loop time.
	pub async fn run_until_idle(&self, frame: Duration, mut after_frame: impl FnMut(Duration)) {
		let mut interval = tokio::time::interval(frame.max(Duration::from_millis(1)));
		interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
		let mut last = interval.tick().await;

		while !self.is_idle() {
			let tick = interval.tick().await;
			self.advance(tick.duration_since(last));
			last = tick;
			after_frame(self.now());
		}
		tracing::debug!(now_ms = self.now().as_millis() as u64, "ui_loop.idle");
	}
}

/// Weak counterpart of [`UiLoop`].
#[derive(Clone, Default)]
pub struct WeakUiLoop(Weak<RefCell<LoopState>>);

impl WeakUiLoop {
	/// Returns the loop if any strong handle is still alive.
	pub fn upgrade(&self) -> Option<UiLoop> {
		self.0.upgrade().map(|state| UiLoop { state })
	}
}

impl fmt::Debug for WeakUiLoop {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("WeakUiLoop").field(&(self.0.strong_count() > 0)).finish()
	}
}

impl fmt::Debug for UiLoop {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("UiLoop")
			.field("now", &state.now)
			.field("animations", &state.animations.len())
			.field("timers", &state.timers.len())
			.finish()
	}
}

#[cfg(test)]
mod tests;
