use core::fmt;

/// A width and height pair.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f32,
	/// Vertical extent.
	pub height: f32,
}

impl Size {
	/// Creates a size.
	pub const fn new(width: f32, height: f32) -> Self {
		Self { width, height }
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

/// An axis-aligned rectangle in host coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
	/// Leading edge.
	pub x: f32,
	/// Top edge.
	pub y: f32,
	/// Horizontal extent.
	pub width: f32,
	/// Vertical extent.
	pub height: f32,
}

impl Rect {
	/// Creates a rectangle from its origin and size components.
	pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Creates a rectangle at the origin with the given size.
	pub const fn from_size(size: Size) -> Self {
		Self::new(0.0, 0.0, size.width, size.height)
	}

	/// Bottom edge.
	pub fn bottom(self) -> f32 {
		self.y + self.height
	}

	/// Horizontal centre line.
	pub fn center_x(self) -> f32 {
		self.x + self.width / 2.0
	}
}
