use core::fmt;
use std::time::Duration;

use crate::config::TransitionTiming;

/// Edge of the host a toast enters from or leaves through.
///
/// Only [`AnimationDirection::Bottom`] can be resolved into a transition
/// today. The enumeration is open so new edges can be added; each addition
/// must be taught to [`crate::placement::resolve`], which rejects the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AnimationDirection {
	/// Slide in from, and out through, the host's bottom edge.
	#[default]
	Bottom,
	/// Reserved for toasts anchored to the host's top edge. Not resolvable yet.
	Top,
}

impl AnimationDirection {
	/// Stable lowercase name, used in logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			AnimationDirection::Bottom => "bottom",
			AnimationDirection::Top => "top",
		}
	}
}

impl fmt::Display for AnimationDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which half of a toast's life a transition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationType {
	/// Bring the toast fully onto the host.
	Present,
	/// Move the toast fully off the host, then detach it.
	Dismiss,
}

impl AnimationType {
	/// Stable lowercase name, used in logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			AnimationType::Present => "present",
			AnimationType::Dismiss => "dismiss",
		}
	}
}

impl fmt::Display for AnimationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// How a toast sizes itself horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizingStyle {
	/// Span the host's width minus the configured horizontal margin,
	/// regardless of content.
	#[default]
	FitHostWidth,
	/// Take the content's natural width. No width guard is applied, so content
	/// wider than the host overflows it.
	FitContent,
}

/// How a toast is presented.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PresentationBehavior {
	/// Edge the toast enters from.
	pub entry_direction: AnimationDirection,
	/// Horizontal sizing policy.
	pub sizing: SizingStyle,
	/// Timing override for this presentation; configured defaults otherwise.
	pub timing: Option<TransitionTiming>,
}

impl PresentationBehavior {
	/// Presents from the bottom edge with the given sizing.
	pub const fn new(sizing: SizingStyle) -> Self {
		Self {
			entry_direction: AnimationDirection::Bottom,
			sizing,
			timing: None,
		}
	}

	/// Presents from the bottom edge, spanning the host's width.
	pub const fn fit_host_width() -> Self {
		Self::new(SizingStyle::FitHostWidth)
	}

	/// Presents from the bottom edge at the content's natural width.
	pub const fn fit_content() -> Self {
		Self::new(SizingStyle::FitContent)
	}

	/// Sets the entry edge.
	#[must_use]
	pub const fn with_direction(mut self, direction: AnimationDirection) -> Self {
		self.entry_direction = direction;
		self
	}

	/// Overrides the transition timing for this presentation.
	#[must_use]
	pub const fn with_timing(mut self, timing: TransitionTiming) -> Self {
		self.timing = Some(timing);
		self
	}
}

/// How a toast is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DismissalBehavior {
	/// Edge the toast leaves through.
	pub exit_direction: AnimationDirection,
	/// Timing override for this dismissal; configured defaults otherwise.
	pub timing: Option<TransitionTiming>,
}

impl DismissalBehavior {
	/// Dismisses through the given edge.
	pub const fn new(exit_direction: AnimationDirection) -> Self {
		Self {
			exit_direction,
			timing: None,
		}
	}

	/// Overrides the transition timing for this dismissal.
	#[must_use]
	pub const fn with_timing(mut self, timing: TransitionTiming) -> Self {
		self.timing = Some(timing);
		self
	}
}

/// Request to dismiss a toast automatically once it has been presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoDismiss {
	/// Time the toast stays fully presented before its dismissal starts.
	pub delay: Duration,
	/// How the automatic dismissal runs.
	pub behavior: DismissalBehavior,
}

impl AutoDismiss {
	/// Dismisses through the bottom edge `delay` after presentation completes.
	pub const fn after(delay: Duration) -> Self {
		Self {
			delay,
			behavior: DismissalBehavior::new(AnimationDirection::Bottom),
		}
	}

	/// Sets the dismissal behaviour.
	#[must_use]
	pub const fn with_behavior(mut self, behavior: DismissalBehavior) -> Self {
		self.behavior = behavior;
		self
	}
}
