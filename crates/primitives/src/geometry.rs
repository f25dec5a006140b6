/// An axis-aligned rectangle in viewport (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	/// Right edge (exclusive).
	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	/// Bottom edge (exclusive).
	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}

	/// Returns true for the zero-size rectangle hosts report for detached or
	/// hidden elements.
	pub fn is_collapsed(&self) -> bool {
		self.width == 0.0 && self.height == 0.0
	}

	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
	}
}

/// A point in viewport coordinates (`x` = left, `y` = top).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Inner size of the host window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}
