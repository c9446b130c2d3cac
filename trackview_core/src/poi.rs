use crate::Point;

/// A waypoint stored next to the tracks of a file.
#[derive(Clone, Debug, Default)]
pub struct Poi {
	key: Option<usize>,
	point: Point,
	name: Option<String>,
}

impl Poi {
	#[must_use]
	pub fn new(point: Point) -> Self {
		Self {
			key: None,
			point,
			name: None,
		}
	}

	/// Attaches the label the file gave this waypoint.
	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	#[must_use]
	pub fn key(&self) -> Option<usize> {
		self.key
	}

	#[must_use]
	pub fn display_name(&self) -> Option<String> {
		self.key.map(|key| format!("poi_{key}"))
	}

	#[must_use]
	pub fn point(&self) -> Point {
		self.point
	}

	#[must_use]
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub(crate) fn register(&mut self, key: usize) {
		self.key = Some(key);
	}
}
