use butter_layout::{Attribute, Size};

use crate::behavior::{AnimationDirection, AnimationType};
use crate::error::ToastError;

/// Where a transition moves an overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
	/// Overlay attribute whose constraint is animated.
	pub attribute: Attribute,
	/// Constant the constraint ends at.
	pub target_offset: f32,
}

/// Resolves the anchor and target constant for a transition.
///
/// The anchor is the overlay's top edge, pinned to the host's bottom edge.
/// Presenting from the bottom raises it to twice the fitted height above that
/// edge; dismissing through the bottom lowers it one fitted height below.
pub fn resolve(kind: AnimationType, direction: AnimationDirection, fitted: Size) -> Result<Placement, ToastError> {
	let target_offset = match (kind, direction) {
		(AnimationType::Dismiss, AnimationDirection::Bottom) => fitted.height,
		(AnimationType::Present, AnimationDirection::Bottom) => -2.0 * fitted.height,
		(AnimationType::Present | AnimationType::Dismiss, AnimationDirection::Top) => {
			return Err(ToastError::UnsupportedTransition { kind, direction });
		}
	};
	Ok(Placement {
		attribute: Attribute::Top,
		target_offset,
	})
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::present_bottom(AnimationType::Present, 40.0, -80.0)]
	#[case::dismiss_bottom(AnimationType::Dismiss, 40.0, 40.0)]
	#[case::present_zero_height(AnimationType::Present, 0.0, 0.0)]
	#[case::dismiss_tall(AnimationType::Dismiss, 123.5, 123.5)]
	fn bottom_edge_targets(#[case] kind: AnimationType, #[case] height: f32, #[case] expected: f32) {
		let placement = resolve(kind, AnimationDirection::Bottom, Size::new(10.0, height)).unwrap();
		assert_eq!(placement.attribute, Attribute::Top);
		assert_eq!(placement.target_offset, expected);
	}

	#[rstest]
	#[case(AnimationType::Present)]
	#[case(AnimationType::Dismiss)]
	fn top_edge_is_unsupported(#[case] kind: AnimationType) {
		assert_eq!(
			resolve(kind, AnimationDirection::Top, Size::new(10.0, 10.0)),
			Err(ToastError::UnsupportedTransition {
				kind,
				direction: AnimationDirection::Top,
			})
		);
	}

	#[test]
	fn resolution_is_pure() {
		let fitted = Size::new(64.0, 41.0);
		let first = resolve(AnimationType::Present, AnimationDirection::Bottom, fitted);
		let second = resolve(AnimationType::Present, AnimationDirection::Bottom, fitted);
		assert_eq!(first, second);
	}
}
