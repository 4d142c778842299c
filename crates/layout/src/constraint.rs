use core::fmt;

use crate::geometry::{Rect, Size};

/// An attribute of the overlay that a constraint pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
	/// The overlay's top edge.
	Top,
	/// The overlay's horizontal centre line.
	CenterX,
	/// The overlay's width.
	Width,
}

impl Attribute {
	/// Stable lowercase name, used in logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Attribute::Top => "top",
			Attribute::CenterX => "center_x",
			Attribute::Width => "width",
		}
	}
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A line on the host that an overlay attribute can be related to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAnchor {
	/// The host's bottom edge.
	Bottom,
	/// The host's horizontal centre line.
	CenterX,
}

impl HostAnchor {
	/// Position of this anchor line inside `host`.
	pub fn position_in(self, host: Rect) -> f32 {
		match self {
			HostAnchor::Bottom => host.bottom(),
			HostAnchor::CenterX => host.center_x(),
		}
	}
}

/// A single layout relation: `overlay.attribute = anchor + constant`.
///
/// Without an anchor the relation is absolute: `overlay.attribute = constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
	/// Overlay attribute being pinned.
	pub attribute: Attribute,
	/// Host line the attribute is measured from, if any.
	pub anchor: Option<HostAnchor>,
	/// Offset from the anchor, or the absolute value without one.
	pub constant: f32,
}

impl Constraint {
	/// Relates `attribute` to a host anchor with an offset.
	pub const fn to_host(attribute: Attribute, anchor: HostAnchor, constant: f32) -> Self {
		Self {
			attribute,
			anchor: Some(anchor),
			constant,
		}
	}

	/// Pins `attribute` to an absolute value.
	pub const fn fixed(attribute: Attribute, constant: f32) -> Self {
		Self {
			attribute,
			anchor: None,
			constant,
		}
	}

	/// Value of the constrained attribute inside `host`.
	pub fn value_in(&self, host: Rect) -> f32 {
		match self.anchor {
			Some(anchor) => anchor.position_in(host) + self.constant,
			None => self.constant,
		}
	}
}

/// The active constraints of one overlay, at most one per [`Attribute`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
	constraints: Vec<Constraint>,
}

impl ConstraintSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Activates `constraint`, replacing any constraint on the same attribute.
	pub fn activate(&mut self, constraint: Constraint) {
		match self.find_mut(constraint.attribute) {
			Some(existing) => *existing = constraint,
			None => self.constraints.push(constraint),
		}
	}

	/// Removes the constraint on `attribute`, returning it.
	pub fn deactivate(&mut self, attribute: Attribute) -> Option<Constraint> {
		let index = self
			.constraints
			.iter()
			.position(|c| c.attribute == attribute)?;
		Some(self.constraints.remove(index))
	}

	/// Finds the constraint on `attribute`.
	pub fn find(&self, attribute: Attribute) -> Option<&Constraint> {
		self.constraints.iter().find(|c| c.attribute == attribute)
	}

	/// Finds the constraint on `attribute` for mutation.
	pub fn find_mut(&mut self, attribute: Attribute) -> Option<&mut Constraint> {
		self.constraints.iter_mut().find(|c| c.attribute == attribute)
	}

	/// Number of active constraints.
	pub fn len(&self) -> usize {
		self.constraints.len()
	}

	/// Returns true if no constraint is active.
	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	/// Resolves the overlay frame inside `host`.
	///
	/// Unconstrained dimensions fall back to `fitted`. Horizontally the
	/// overlay is placed by `CenterX`, vertically by `Top`; an unconstrained
	/// axis sits on the host's origin.
	pub fn resolve(&self, host: Rect, fitted: Size) -> Rect {
		let width = self
			.find(Attribute::Width)
			.map_or(fitted.width, |c| c.value_in(host).max(0.0));
		let height = fitted.height;

		let x = match self.find(Attribute::CenterX) {
			Some(c) => c.value_in(host) - width / 2.0,
			None => host.x,
		};
		let y = self.find(Attribute::Top).map_or(host.y, |top| top.value_in(host));

		Rect::new(x, y, width, height)
	}
}
