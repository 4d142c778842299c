use butter_layout::{Rect, Size};

use crate::handle::{OverlayHandle, OverlayId};

/// A surface overlays are attached to.
///
/// The host decides where overlays are drawn by resolving their constraints
/// against its bounds during layout. It does not otherwise constrain them.
pub trait Host {
	/// The host's frame. Overlay constraints are resolved against it.
	fn bounds(&self) -> Rect;

	/// Adds an overlay as a child.
	fn attach(&mut self, overlay: OverlayHandle);

	/// Removes the child with `id`. Returns whether it was attached.
	fn detach(&mut self, id: OverlayId) -> bool;

	/// Resolves every child's frame from its current constraints.
	fn layout_if_needed(&mut self);
}

/// In-memory host that records its children and layout passes.
#[derive(Debug, Default)]
pub struct Stage {
	bounds: Rect,
	children: Vec<OverlayHandle>,
	layout_passes: usize,
}

impl Stage {
	/// Creates an empty stage of the given size at the origin.
	pub fn new(size: Size) -> Self {
		Self {
			bounds: Rect::from_size(size),
			children: Vec::new(),
			layout_passes: 0,
		}
	}

	/// Attached overlays in attachment order.
	pub fn children(&self) -> &[OverlayHandle] {
		&self.children
	}

	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	pub fn contains(&self, id: OverlayId) -> bool {
		self.children.iter().any(|child| child.id() == id)
	}

	/// Number of layout passes run so far.
	pub fn layout_passes(&self) -> usize {
		self.layout_passes
	}

	/// Resizes the stage. Children pick the change up at the next layout pass.
	pub fn set_bounds(&mut self, bounds: Rect) {
		self.bounds = bounds;
	}
}

impl Host for Stage {
	fn bounds(&self) -> Rect {
		self.bounds
	}

	fn attach(&mut self, overlay: OverlayHandle) {
		if self.contains(overlay.id()) {
			return;
		}
		tracing::trace!(overlay = %overlay.id(), children = self.children.len() + 1, "stage.attach");
		self.children.push(overlay);
	}

	fn detach(&mut self, id: OverlayId) -> bool {
		let before = self.children.len();
		self.children.retain(|child| child.id() != id);
		let detached = self.children.len() != before;
		tracing::trace!(overlay = %id, detached, children = self.children.len(), "stage.detach");
		detached
	}

	fn layout_if_needed(&mut self) {
		for child in &self.children {
			child.layout_in(self.bounds);
		}
		self.layout_passes += 1;
	}
}
