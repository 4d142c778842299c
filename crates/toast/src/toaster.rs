//! The presentation/dismissal engine.

use core::cell::RefCell;
use std::rc::Rc;

use butter_animation::Tween;
use butter_layout::{Attribute, Constraint, HostAnchor};

use crate::behavior::{
	AnimationDirection, AnimationType, AutoDismiss, DismissalBehavior, PresentationBehavior, SizingStyle,
};
use crate::config::{ToasterConfig, TransitionTiming};
use crate::content::ToastContent;
use crate::error::ToastError;
use crate::handle::{OverlayHandle, OverlayPhase};
use crate::host::Host;
use crate::placement;
use crate::surface::OverlaySurface;
use crate::ui_loop::UiLoop;

/// Presents and dismisses toasts.
///
/// Holds nothing but configuration: every overlay's state lives on its
/// [`OverlayHandle`], and every pending transition or timer lives on the
/// [`UiLoop`]. Toasts presented by one toaster are independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Toaster {
	config: ToasterConfig,
}

impl Toaster {
	pub fn new(config: ToasterConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &ToasterConfig {
		&self.config
	}

	/// Attaches a toast to `host` and slides it into view.
	///
	/// The overlay starts just below the host's bottom edge, horizontally
	/// centred. Its top edge is the anchor the transition moves. The handle is
	/// returned before any frame runs.
	///
	/// If `auto_dismiss` is given, a timer is started once the present
	/// transition completes and dismisses the toast after its delay.
	///
	/// A transition that cannot run (unsupported direction) is logged and
	/// skipped: the overlay stays attached at its starting place, counts as
	/// presented, and gets no auto-dismiss timer.
	pub fn present<H: Host + 'static>(
		&self,
		ui: &UiLoop,
		content: ToastContent,
		behavior: PresentationBehavior,
		host: &Rc<RefCell<H>>,
		auto_dismiss: Option<AutoDismiss>,
	) -> OverlayHandle {
		let handle = OverlayHandle::new(OverlaySurface::new(content, self.config.metrics));
		host.borrow_mut().attach(handle.clone());

		let fitted = handle.fitted_size();
		let bounds = host.borrow().bounds();
		handle.with_constraints(|set| {
			set.activate(Constraint::to_host(Attribute::CenterX, HostAnchor::CenterX, 0.0));
			set.activate(Constraint::to_host(Attribute::Top, HostAnchor::Bottom, fitted.height));
			if behavior.sizing == SizingStyle::FitHostWidth {
				set.activate(Constraint::fixed(Attribute::Width, bounds.width - self.config.horizontal_margin));
			}
		});
		tracing::debug!(
			overlay = %handle.id(),
			direction = %behavior.entry_direction,
			sizing = ?behavior.sizing,
			width = fitted.width,
			height = fitted.height,
			"toast.present"
		);

		let timing = behavior.timing.unwrap_or(self.config.present);
		let toaster = *self;
		let on_complete = {
			let handle = handle.clone();
			let host = Rc::clone(host);
			move |ui: &UiLoop| toaster.presented(ui, &handle, &host, auto_dismiss)
		};
		if let Err(error) = self.animate(ui, &handle, host, AnimationType::Present, behavior.entry_direction, timing, on_complete) {
			tracing::warn!(overlay = %handle.id(), %error, "toast.transition.abort");
			handle.set_phase(OverlayPhase::Presented);
		}

		handle
	}

	/// Slides a toast out of view and detaches it from `host`.
	///
	/// Cancels a pending auto-dismiss timer. While the present transition is
	/// still running the dismissal is queued and starts as soon as it
	/// completes.
	///
	/// # Errors
	///
	/// - [`ToastError::AlreadyDismissed`] if the toast is already leaving or
	///   gone, or a dismissal is already queued.
	/// - [`ToastError::UnsupportedTransition`] if `behavior` names an exit
	///   edge that cannot be animated.
	/// - [`ToastError::MissingAnchor`] if the toast's top constraint was
	///   removed.
	///
	/// On error nothing changes.
	pub fn dismiss<H: Host + 'static>(
		&self,
		ui: &UiLoop,
		handle: &OverlayHandle,
		host: &Rc<RefCell<H>>,
		behavior: DismissalBehavior,
	) -> Result<(), ToastError> {
		match handle.phase() {
			OverlayPhase::Dismissing | OverlayPhase::Dismissed => {
				tracing::warn!(overlay = %handle.id(), phase = %handle.phase(), "toast.dismiss.rejected");
				Err(ToastError::AlreadyDismissed(handle.id()))
			}
			OverlayPhase::Presenting => {
				if handle.has_queued_dismissal() {
					tracing::warn!(overlay = %handle.id(), "toast.dismiss.rejected");
					return Err(ToastError::AlreadyDismissed(handle.id()));
				}
				placement::resolve(AnimationType::Dismiss, behavior.exit_direction, handle.fitted_size())?;
				handle.queue_dismissal(behavior);
				tracing::debug!(overlay = %handle.id(), "toast.dismiss.queued");
				Ok(())
			}
			OverlayPhase::Presented => self.start_dismissal(ui, handle, host, behavior),
		}
	}

	fn start_dismissal<H: Host + 'static>(
		&self,
		ui: &UiLoop,
		handle: &OverlayHandle,
		host: &Rc<RefCell<H>>,
		behavior: DismissalBehavior,
	) -> Result<(), ToastError> {
		let timing = behavior.timing.unwrap_or(self.config.dismiss);
		let on_complete = {
			let handle = handle.clone();
			move |_: &UiLoop| {
				handle.set_phase(OverlayPhase::Dismissed);
				tracing::debug!(overlay = %handle.id(), "toast.dismissed");
			}
		};
		self.animate(ui, handle, host, AnimationType::Dismiss, behavior.exit_direction, timing, on_complete)?;

		if let Some(timer) = handle.take_auto_dismiss()
			&& ui.cancel(timer)
		{
			tracing::debug!(overlay = %handle.id(), "toast.auto_dismiss.cancelled");
		}
		handle.set_phase(OverlayPhase::Dismissing);
		tracing::debug!(overlay = %handle.id(), direction = %behavior.exit_direction, "toast.dismiss");
		Ok(())
	}

	/// Completion of the present transition.
	fn presented<H: Host + 'static>(&self, ui: &UiLoop, handle: &OverlayHandle, host: &Rc<RefCell<H>>, auto_dismiss: Option<AutoDismiss>) {
		handle.set_phase(OverlayPhase::Presented);
		tracing::debug!(overlay = %handle.id(), frame = ?handle.frame(), "toast.presented");

		if let Some(behavior) = handle.take_queued_dismissal() {
			if let Err(error) = self.start_dismissal(ui, handle, host, behavior) {
				tracing::warn!(overlay = %handle.id(), %error, "toast.transition.abort");
			}
			return;
		}

		if let Some(auto_dismiss) = auto_dismiss {
			self.schedule_auto_dismiss(ui, handle, host, auto_dismiss);
		}
	}

	fn schedule_auto_dismiss<H: Host + 'static>(&self, ui: &UiLoop, handle: &OverlayHandle, host: &Rc<RefCell<H>>, auto_dismiss: AutoDismiss) {
		let toaster = *self;
		let weak = handle.downgrade();
		let host = Rc::clone(host);
		let timer = ui.schedule_after(auto_dismiss.delay, move |ui| {
			let Some(handle) = weak.upgrade() else {
				tracing::trace!("toast.auto_dismiss.dropped");
				return;
			};
			handle.take_auto_dismiss();
			tracing::debug!(overlay = %handle.id(), "toast.auto_dismiss.fire");
			if let Err(error) = toaster.dismiss(ui, &handle, &host, auto_dismiss.behavior) {
				tracing::warn!(overlay = %handle.id(), %error, "toast.transition.abort");
			}
		});
		handle.set_auto_dismiss(timer);
		tracing::debug!(
			overlay = %handle.id(),
			delay_ms = auto_dismiss.delay.as_millis() as u64,
			"toast.auto_dismiss.scheduled"
		);
	}

	/// Moves the overlay's anchor to the placement for `kind` and `direction`.
	///
	/// The host is laid out once up front and again on every frame. A
	/// dismiss transition detaches the overlay from the host before
	/// `on_complete` runs.
	#[allow(clippy::too_many_arguments)]
	fn animate<H: Host + 'static>(
		&self,
		ui: &UiLoop,
		handle: &OverlayHandle,
		host: &Rc<RefCell<H>>,
		kind: AnimationType,
		direction: AnimationDirection,
		timing: TransitionTiming,
		on_complete: impl FnOnce(&UiLoop) + 'static,
	) -> Result<(), ToastError> {
		let placement = placement::resolve(kind, direction, handle.fitted_size())?;
		let attribute = placement.attribute;
		let start = handle.anchor_constant(attribute).ok_or(ToastError::MissingAnchor {
			overlay: handle.id(),
			attribute,
		})?;

		host.borrow_mut().layout_if_needed();

		let tween = Tween::new(start, placement.target_offset, timing.duration)
			.with_delay(timing.delay)
			.with_curve(timing.curve());
		tracing::trace!(
			overlay = %handle.id(),
			kind = %kind,
			from = start,
			to = placement.target_offset,
			duration_ms = timing.duration.as_millis() as u64,
			"toast.transition.start"
		);

		let on_frame = {
			let handle = handle.clone();
			let host = Rc::clone(host);
			move |constant: f32| {
				handle.set_anchor_constant(attribute, constant);
				host.borrow_mut().layout_if_needed();
			}
		};
		let finish = {
			let handle = handle.clone();
			let host = Rc::clone(host);
			move |ui: &UiLoop| {
				if kind == AnimationType::Dismiss {
					host.borrow_mut().detach(handle.id());
				}
				tracing::trace!(overlay = %handle.id(), kind = %kind, "toast.transition.end");
				on_complete(ui);
			}
		};
		ui.animate(tween, on_frame, finish);
		Ok(())
	}
}
