use butter_layout::Attribute;
use thiserror::Error;

use crate::behavior::{AnimationDirection, AnimationType};
use crate::handle::OverlayId;

/// Reasons a transition could not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ToastError {
	/// The direction cannot be resolved into a placement for this kind of transition.
	#[error("unsupported {kind} transition from the {direction} edge")]
	UnsupportedTransition {
		/// Transition that was requested.
		kind: AnimationType,
		/// Edge that was requested.
		direction: AnimationDirection,
	},

	/// The overlay has no constraint on the attribute the transition moves.
	#[error("overlay {overlay} has no {attribute} anchor to animate")]
	MissingAnchor {
		/// Overlay that was asked to move.
		overlay: OverlayId,
		/// Attribute the transition needed.
		attribute: Attribute,
	},

	/// The overlay is already leaving or has left its host.
	#[error("overlay {0} is already dismissed")]
	AlreadyDismissed(OverlayId),
}
