use crate::content::{OverlayCallback, ToastContent};
use crate::handle::OverlayHandle;

/// Receives interaction notifications from an overlay surface.
///
/// Each surface owns exactly one delegate, bound when the overlay is created.
pub trait InteractionDelegate {
	/// The overlay's action button was activated.
	fn button_activated(&self, overlay: &OverlayHandle);

	/// A swipe that dismisses by gesture was recognised on the overlay.
	fn swipe_detected(&self, overlay: &OverlayHandle);
}

/// Delegate that forwards interactions to the callbacks carried by the content.
///
/// Slots without a callback make the matching notification a no-op.
#[derive(Clone, Default)]
pub struct CallbackRouter {
	on_activate: Option<OverlayCallback>,
	on_swipe: Option<OverlayCallback>,
}

impl CallbackRouter {
	/// Binds a router to the callbacks of `content`.
	pub fn for_content(content: &ToastContent) -> Self {
		Self {
			on_activate: content.button_model().map(|button| button.on_activate().clone()),
			on_swipe: content.swipe_handler().cloned(),
		}
	}
}

impl InteractionDelegate for CallbackRouter {
	fn button_activated(&self, overlay: &OverlayHandle) {
		if let Some(callback) = &self.on_activate {
			tracing::trace!(overlay = %overlay.id(), "toast.button.activated");
			callback(overlay);
		}
	}

	fn swipe_detected(&self, overlay: &OverlayHandle) {
		if let Some(callback) = &self.on_swipe {
			tracing::trace!(overlay = %overlay.id(), "toast.swipe.detected");
			callback(overlay);
		}
	}
}

impl core::fmt::Debug for CallbackRouter {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("CallbackRouter")
			.field("on_activate", &self.on_activate.is_some())
			.field("on_swipe", &self.on_swipe.is_some())
			.finish()
	}
}
