use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use butter_animation::Tween;
use pretty_assertions::assert_eq;

use super::*;

fn ms(value: u64) -> Duration {
	Duration::from_millis(value)
}

type Log = Rc<RefCell<Vec<String>>>;

fn log() -> Log {
	Rc::new(RefCell::new(Vec::new()))
}

fn push(log: &Log, entry: impl Into<String>) {
	log.borrow_mut().push(entry.into());
}

#[test]
fn timers_fire_at_their_deadline() {
	let ui = UiLoop::new();
	let fired = log();
	let f = fired.clone();
	ui.schedule_after(ms(100), move |ui| push(&f, format!("{}", ui.now().as_millis())));

	ui.advance(ms(99));
	assert!(fired.borrow().is_empty());
	ui.advance(ms(50));
	assert_eq!(*fired.borrow(), vec!["100"]);
	assert_eq!(ui.now(), ms(149));
	assert!(ui.is_idle());
}

#[test]
fn timers_run_in_deadline_then_schedule_order() {
	let ui = UiLoop::new();
	let order = log();
	for (name, delay) in [("b", 20), ("a", 10), ("c", 20)] {
		let order = order.clone();
		ui.schedule_after(ms(delay), move |_| push(&order, name));
	}
	ui.advance(ms(100));
	assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn cancelled_timer_never_fires() {
	let ui = UiLoop::new();
	let fired = log();
	let f = fired.clone();
	let id = ui.schedule_after(ms(10), move |_| push(&f, "fired"));

	assert_eq!(ui.pending_timers(), 1);
	assert!(ui.cancel(id));
	assert!(!ui.cancel(id));
	ui.advance(ms(20));
	assert!(fired.borrow().is_empty());
}

#[test]
fn timer_callbacks_may_schedule_more_work() {
	let ui = UiLoop::new();
	let order = log();
	let outer = order.clone();
	ui.schedule_after(ms(10), move |ui| {
		push(&outer, format!("outer@{}", ui.now().as_millis()));
		let inner = outer.clone();
		ui.schedule_after(ms(5), move |ui| push(&inner, format!("inner@{}", ui.now().as_millis())));
	});

	ui.advance(ms(100));
	assert_eq!(*order.borrow(), vec!["outer@10", "inner@15"]);
}

#[test]
fn animation_frames_end_exactly_on_target() {
	let ui = UiLoop::new();
	let values = Rc::new(RefCell::new(Vec::new()));
	let done = log();
	let v = values.clone();
	let d = done.clone();
	ui.animate(Tween::new(0.0f32, 100.0, ms(100)), move |value| v.borrow_mut().push(value), move |_| push(&d, "done"));

	assert_eq!(ui.active_animations(), 1);
	ui.advance(ms(50));
	ui.advance(ms(100));

	assert_eq!(*values.borrow(), vec![50.0, 100.0]);
	assert_eq!(*done.borrow(), vec!["done"]);
	assert_eq!(ui.active_animations(), 0);
}

#[test]
fn animation_is_anchored_at_current_time() {
	let ui = UiLoop::new();
	ui.advance(ms(1000));
	let last = Rc::new(RefCell::new(None));
	let l = last.clone();
	ui.animate(Tween::new(0.0f32, 10.0, ms(100)), move |value| *l.borrow_mut() = Some(value), |_| {});

	ui.advance(ms(50));
	assert_eq!(*last.borrow(), Some(5.0));
}

#[test]
fn completion_precedes_timer_due_at_the_same_instant() {
	let ui = UiLoop::new();
	let order = log();
	let t = order.clone();
	ui.schedule_after(ms(100), move |_| push(&t, "timer"));
	let c = order.clone();
	ui.animate(Tween::new(0.0f32, 1.0, ms(100)), |_| {}, move |_| push(&c, "complete"));

	ui.advance(ms(200));
	assert_eq!(*order.borrow(), vec!["complete", "timer"]);
}

#[test]
fn events_inside_one_step_run_at_their_own_time() {
	let ui = UiLoop::new();
	let order = log();
	let o = order.clone();
	ui.animate(Tween::new(0.0f32, 1.0, ms(30)), |_| {}, move |ui| {
		push(&o, format!("complete@{}", ui.now().as_millis()));
		let o = o.clone();
		ui.schedule_after(ms(20), move |ui| push(&o, format!("timer@{}", ui.now().as_millis())));
	});

	ui.advance(ms(1000));
	assert_eq!(*order.borrow(), vec!["complete@30", "timer@50"]);
	assert_eq!(ui.now(), ms(1000));
}

#[test]
fn zero_length_animation_completes_on_next_advance() {
	let ui = UiLoop::new();
	let done = log();
	let d = done.clone();
	ui.animate(Tween::new(1.0f32, 2.0, Duration::ZERO), |_| {}, move |_| push(&d, "done"));
	assert!(done.borrow().is_empty());

	ui.advance(Duration::ZERO);
	assert_eq!(*done.borrow(), vec!["done"]);
}

#[test]
fn run_frames_lands_on_total() {
	let ui = UiLoop::new();
	ui.run_frames(ms(100), ms(16));
	assert_eq!(ui.now(), ms(100));
	ui.run_frames(ms(5), Duration::ZERO);
	assert_eq!(ui.now(), ms(105));
}

#[test]
fn far_future_timer_stays_pending() {
	let ui = UiLoop::new();
	ui.advance(ms(600));
	let fired = log();
	let f = fired.clone();
	let id = ui.schedule_after(Duration::MAX, move |_| push(&f, "fired"));

	assert_eq!(id.deadline(), Duration::MAX);
	ui.advance(ms(600));
	assert!(fired.borrow().is_empty());
	assert_eq!(ui.pending_timers(), 1);
	assert_eq!(ui.now(), ms(1200));
}

#[test]
fn advance_saturates_at_the_end_of_time() {
	let ui = UiLoop::new();
	ui.advance(ms(10));
	let fired = log();
	let f = fired.clone();
	ui.schedule_after(Duration::MAX, move |_| push(&f, "fired"));

	ui.advance(Duration::MAX);
	assert_eq!(ui.now(), Duration::MAX);
	assert_eq!(*fired.borrow(), vec!["fired"]);
}

#[test]
fn endless_animation_keeps_running() {
	let ui = UiLoop::new();
	ui.advance(ms(5));
	let last = Rc::new(RefCell::new(None));
	let l = last.clone();
	let tween = Tween::new(0.0f32, 1.0, Duration::MAX).with_delay(ms(1));
	ui.animate(tween, move |value| *l.borrow_mut() = Some(value), |_| {});

	ui.advance(ms(100));
	assert_eq!(ui.active_animations(), 1);
	let value = last.borrow().expect("frame ran");
	assert!((0.0..1e-6).contains(&value), "{value}");
}

#[test]
fn weak_handle_upgrades_only_while_the_loop_lives() {
	let ui = UiLoop::new();
	let weak = ui.downgrade();
	let upgraded = weak.upgrade().expect("loop is alive");
	upgraded.advance(ms(7));
	assert_eq!(ui.now(), ms(7));

	drop(upgraded);
	drop(ui);
	assert!(weak.upgrade().is_none());
}

#[tokio::test(start_paused = true)]
async fn run_until_idle_drains_timers_and_animations() {
	let ui = UiLoop::new();
	let order = log();
	let o = order.clone();
	ui.schedule_after(ms(100), move |ui| {
		push(&o, "timer");
		let o = o.clone();
		ui.animate(Tween::new(0.0f32, 1.0, ms(200)), |_| {}, move |_| push(&o, "complete"));
	});

	let mut frames = 0;
	ui.run_until_idle(ms(16), |_| frames += 1).await;

	assert!(ui.is_idle());
	assert_eq!(*order.borrow(), vec!["timer", "complete"]);
	assert!(ui.now() >= ms(300));
	assert!(frames >= 300 / 16);
}

#[tokio::test(start_paused = true)]
async fn run_until_idle_returns_at_once_when_idle() {
	let ui = UiLoop::new();
	let mut frames = 0;
	ui.run_until_idle(ms(16), |_| frames += 1).await;
	assert_eq!(frames, 0);
	assert_eq!(ui.now(), Duration::ZERO);
}
