/// mean earth radius, in metres
const EARTH_RADIUS: f64 = 6_371_000.0;

/// A position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub lat: f64,
	pub lon: f64,
}

impl Point {
	#[must_use]
	pub const fn new(lat: f64, lon: f64) -> Self {
		Self { lat, lon }
	}
}

/// A recorded track position, with the elevation in metres if the device logged one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackPoint {
	pub point: Point,
	pub elevation: Option<f64>,
}

impl TrackPoint {
	#[must_use]
	pub const fn new(lat: f64, lon: f64, elevation: Option<f64>) -> Self {
		Self {
			point: Point::new(lat, lon),
			elevation,
		}
	}
}

/// Great-circle distance between two points, in metres.
#[must_use]
pub fn haversine_distance(a: Point, b: Point) -> f64 {
	let dlat = (b.lat - a.lat).to_radians();
	let dlon = (b.lon - a.lon).to_radians();

	let h = (dlat / 2.0).sin().powi(2)
		+ a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);

	2.0 * EARTH_RADIUS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// An axis-aligned latitude/longitude rectangle.
///
/// The empty rectangle has its minimum above its maximum, so extending it with a
/// single point yields a degenerate rectangle around that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub min: Point,
	pub max: Point,
}

impl Default for Rect {
	fn default() -> Self {
		Self::empty()
	}
}

impl Rect {
	#[must_use]
	pub const fn empty() -> Self {
		Self {
			min: Point::new(f64::INFINITY, f64::INFINITY),
			max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
		}
	}

	#[must_use]
	pub const fn new(min: Point, max: Point) -> Self {
		Self { min, max }
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.min.lat > self.max.lat || self.min.lon > self.max.lon
	}

	pub fn extend(&mut self, point: Point) {
		self.min.lat = self.min.lat.min(point.lat);
		self.min.lon = self.min.lon.min(point.lon);
		self.max.lat = self.max.lat.max(point.lat);
		self.max.lon = self.max.lon.max(point.lon);
	}

	#[must_use]
	pub fn united(mut self, other: &Self) -> Self {
		if !other.is_empty() {
			self.extend(other.min);
			self.extend(other.max);
		}
		self
	}

	#[must_use]
	pub fn contains(&self, point: Point) -> bool {
		(self.min.lat..=self.max.lat).contains(&point.lat)
			&& (self.min.lon..=self.max.lon).contains(&point.lon)
	}
}

impl FromIterator<Point> for Rect {
	fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
		iter.into_iter().fold(Self::empty(), |mut rect, point| {
			rect.extend(point);
			rect
		})
	}
}
