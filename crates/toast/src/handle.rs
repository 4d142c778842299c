//! Live overlays.

use core::cell::RefCell;
use core::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use butter_layout::{Attribute, ConstraintSet, Rect, Size};

use crate::behavior::DismissalBehavior;
use crate::content::ToastContent;
use crate::surface::{OverlaySurface, SwipeDirection};
use crate::ui_loop::TimerId;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique overlay identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(u64);

impl OverlayId {
	fn next() -> Self {
		Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// Raw numeric value.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for OverlayId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Lifecycle of an overlay. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverlayPhase {
	/// Attached; the present transition is in flight.
	Presenting,
	/// Attached and at rest on the host.
	Presented,
	/// Attached; the dismiss transition is in flight.
	Dismissing,
	/// Detached from the host for good.
	Dismissed,
}

impl OverlayPhase {
	/// Stable lowercase name, used in logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			OverlayPhase::Presenting => "presenting",
			OverlayPhase::Presented => "presented",
			OverlayPhase::Dismissing => "dismissing",
			OverlayPhase::Dismissed => "dismissed",
		}
	}
}

impl fmt::Display for OverlayPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

struct Overlay {
	id: OverlayId,
	surface: OverlaySurface,
	state: RefCell<OverlayState>,
}

struct OverlayState {
	phase: OverlayPhase,
	constraints: ConstraintSet,
	frame: Rect,
	auto_dismiss: Option<TimerId>,
	queued_dismissal: Option<DismissalBehavior>,
}

/// Shared handle to one presented overlay.
///
/// Handles are created by [`Toaster::present`](crate::Toaster::present) and
/// clone cheaply; every clone refers to the same overlay. The host keeps one
/// clone while the overlay is attached.
#[derive(Clone)]
pub struct OverlayHandle(Rc<Overlay>);

impl OverlayHandle {
	pub(crate) fn new(surface: OverlaySurface) -> Self {
		let fitted = surface.fitted_size();
		Self(Rc::new(Overlay {
			id: OverlayId::next(),
			surface,
			state: RefCell::new(OverlayState {
				phase: OverlayPhase::Presenting,
				constraints: ConstraintSet::new(),
				frame: Rect::from_size(fitted),
				auto_dismiss: None,
				queued_dismissal: None,
			}),
		}))
	}

	pub fn id(&self) -> OverlayId {
		self.0.id
	}

	pub fn surface(&self) -> &OverlaySurface {
		&self.0.surface
	}

	pub fn content(&self) -> &ToastContent {
		self.0.surface.content()
	}

	pub fn phase(&self) -> OverlayPhase {
		self.0.state.borrow().phase
	}

	/// Whether the overlay has been detached after its dismiss transition.
	pub fn is_dismissed(&self) -> bool {
		self.phase() == OverlayPhase::Dismissed
	}

	/// Frame resolved by the host's most recent layout pass.
	pub fn frame(&self) -> Rect {
		self.0.state.borrow().frame
	}

	pub fn fitted_size(&self) -> Size {
		self.0.surface.fitted_size()
	}

	/// Corner radius for the current frame.
	pub fn corner_radius(&self) -> f32 {
		OverlaySurface::corner_radius(self.frame().height)
	}

	/// Current constant of the constraint on `attribute`, if one is active.
	pub fn anchor_constant(&self, attribute: Attribute) -> Option<f32> {
		self.0.state.borrow().constraints.find(attribute).map(|c| c.constant)
	}

	/// Snapshot of the active constraints.
	pub fn constraints(&self) -> ConstraintSet {
		self.0.state.borrow().constraints.clone()
	}

	/// Edits the overlay's constraints in place.
	///
	/// Changes take effect at the host's next layout pass.
	pub fn with_constraints<R>(&self, f: impl FnOnce(&mut ConstraintSet) -> R) -> R {
		f(&mut self.0.state.borrow_mut().constraints)
	}

	/// Reports a tap on the action button. Returns whether it was routed.
	pub fn notify_button_activated(&self) -> bool {
		self.0.surface.button_tapped(self)
	}

	/// Reports a swipe gesture. Returns whether it was recognised and routed.
	pub fn notify_swipe(&self, direction: SwipeDirection) -> bool {
		self.0.surface.swiped(self, direction)
	}

	/// Resolves the frame against the host's bounds.
	pub fn layout_in(&self, bounds: Rect) {
		let fitted = self.fitted_size();
		let mut state = self.0.state.borrow_mut();
		state.frame = state.constraints.resolve(bounds, fitted);
	}

	pub(crate) fn downgrade(&self) -> WeakOverlayHandle {
		WeakOverlayHandle(Rc::downgrade(&self.0))
	}

	pub(crate) fn set_phase(&self, phase: OverlayPhase) {
		self.0.state.borrow_mut().phase = phase;
	}

	/// Moves the constraint on `attribute`. Does nothing if it was removed.
	pub(crate) fn set_anchor_constant(&self, attribute: Attribute, constant: f32) {
		if let Some(constraint) = self.0.state.borrow_mut().constraints.find_mut(attribute) {
			constraint.constant = constant;
		}
	}

	pub(crate) fn set_auto_dismiss(&self, timer: TimerId) {
		self.0.state.borrow_mut().auto_dismiss = Some(timer);
	}

	pub(crate) fn take_auto_dismiss(&self) -> Option<TimerId> {
		self.0.state.borrow_mut().auto_dismiss.take()
	}

	pub(crate) fn has_queued_dismissal(&self) -> bool {
		self.0.state.borrow().queued_dismissal.is_some()
	}

	pub(crate) fn queue_dismissal(&self, behavior: DismissalBehavior) {
		self.0.state.borrow_mut().queued_dismissal = Some(behavior);
	}

	pub(crate) fn take_queued_dismissal(&self) -> Option<DismissalBehavior> {
		self.0.state.borrow_mut().queued_dismissal.take()
	}
}

impl PartialEq for OverlayHandle {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for OverlayHandle {}

impl fmt::Debug for OverlayHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.0.state.borrow();
		f.debug_struct("OverlayHandle")
			.field("id", &self.0.id)
			.field("phase", &state.phase)
			.field("frame", &state.frame)
			.finish_non_exhaustive()
	}
}

/// Non-owning reference to an overlay, held by scheduled timers.
#[derive(Clone)]
pub(crate) struct WeakOverlayHandle(Weak<Overlay>);

impl WeakOverlayHandle {
	pub(crate) fn upgrade(&self) -> Option<OverlayHandle> {
		self.0.upgrade().map(OverlayHandle)
	}
}

#[cfg(test)]
mod tests {
	use butter_layout::{Constraint, HostAnchor};

	use super::*;
	use crate::config::SurfaceMetrics;

	fn handle(message: &str) -> OverlayHandle {
		OverlayHandle::new(OverlaySurface::new(ToastContent::new(message), SurfaceMetrics::default()))
	}

	#[test]
	fn ids_are_unique() {
		assert_ne!(handle("a").id(), handle("b").id());
	}

	#[test]
	fn clones_share_state() {
		let a = handle("a");
		let b = a.clone();
		b.set_phase(OverlayPhase::Presented);
		assert_eq!(a.phase(), OverlayPhase::Presented);
		assert_eq!(a, b);
		assert_ne!(a, handle("a"));
	}

	#[test]
	fn setting_a_missing_anchor_is_a_no_op() {
		let overlay = handle("a");
		overlay.set_anchor_constant(Attribute::Top, 10.0);
		assert_eq!(overlay.anchor_constant(Attribute::Top), None);
	}

	#[test]
	fn layout_resolves_constraints() {
		let overlay = handle("hello");
		overlay.with_constraints(|set| {
			set.activate(Constraint::to_host(Attribute::CenterX, HostAnchor::CenterX, 0.0));
			set.activate(Constraint::to_host(Attribute::Top, HostAnchor::Bottom, 41.0));
		});
		overlay.layout_in(Rect::new(0.0, 0.0, 300.0, 300.0));
		assert_eq!(overlay.frame(), Rect::new(118.0, 341.0, 64.0, 41.0));

		overlay.set_anchor_constant(Attribute::Top, -82.0);
		overlay.layout_in(Rect::new(0.0, 0.0, 300.0, 300.0));
		assert_eq!(overlay.frame().y, 218.0);
		assert!((overlay.corner_radius() - 14.35).abs() < 1e-4);
	}

	#[test]
	fn weak_handle_does_not_keep_overlay_alive() {
		let overlay = handle("a");
		let weak = overlay.downgrade();
		assert!(weak.upgrade().is_some());
		drop(overlay);
		assert!(weak.upgrade().is_none());
	}
}
