use crate::{Rect, Rgb, TrackPoint, haversine_distance};

/// The part of a track that feeds the chart extrema.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
	/// horizontal length of the track, in metres
	pub distance_2d: f64,
	pub altitude_min: f64,
	pub altitude_max: f64,
}

impl Extent {
	fn of_path(path: &[TrackPoint]) -> Self {
		let distance_2d = path
			.windows(2)
			.map(|w| haversine_distance(w[0].point, w[1].point))
			.sum();

		let (altitude_min, altitude_max) = path
			.iter()
			.filter_map(|p| p.elevation)
			.fold(None, |acc, e| match acc {
				None => Some((e, e)),
				Some((min, max)) => Some((f64::min(min, e), f64::max(max, e))),
			})
			.unwrap_or_default();

		Self {
			distance_2d,
			altitude_min,
			altitude_max,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct Track {
	key: Option<usize>,
	color: Option<Rgb>,
	path: Vec<TrackPoint>,
	extent: Extent,
}

impl Track {
	#[must_use]
	pub fn new(path: Vec<TrackPoint>) -> Self {
		Self {
			key: None,
			color: None,
			extent: Extent::of_path(&path),
			path,
		}
	}

	/// A track without a path, for loaders that already know its metrics.
	#[must_use]
	pub fn from_metrics(distance_2d: f64, altitude_min: f64, altitude_max: f64) -> Self {
		Self {
			extent: Extent {
				distance_2d,
				altitude_min,
				altitude_max,
			},
			..Self::default()
		}
	}

	/// The key assigned by the [`FilesList`](crate::FilesList) holding this track.
	#[must_use]
	pub fn key(&self) -> Option<usize> {
		self.key
	}

	#[must_use]
	pub fn display_name(&self) -> Option<String> {
		self.key.map(|key| format!("track_{key}"))
	}

	#[must_use]
	pub fn color(&self) -> Option<Rgb> {
		self.color
	}

	#[must_use]
	pub fn path(&self) -> &[TrackPoint] {
		&self.path
	}

	#[must_use]
	pub fn extent(&self) -> Extent {
		self.extent
	}

	#[must_use]
	pub fn distance_2d(&self) -> f64 {
		self.extent.distance_2d
	}

	#[must_use]
	pub fn altitude_min(&self) -> f64 {
		self.extent.altitude_min
	}

	#[must_use]
	pub fn altitude_max(&self) -> f64 {
		self.extent.altitude_max
	}

	#[must_use]
	pub fn bounding_box(&self) -> Rect {
		self.path.iter().map(|p| p.point).collect()
	}

	/// Replaces the path and recomputes the metrics derived from it.
	///
	/// Once the track belongs to a [`FilesList`](crate::FilesList), go through
	/// [`FilesList::set_track_path`](crate::FilesList::set_track_path) so the extrema follow.
	pub fn set_path(&mut self, path: Vec<TrackPoint>) {
		self.extent = Extent::of_path(&path);
		self.path = path;
	}

	pub(crate) fn register(&mut self, key: usize, color: Rgb) {
		self.key = Some(key);
		self.color = Some(color);
	}
}

#[cfg(test)]
mod tests {
	use super::Track;
	use crate::TrackPoint;

	#[test]
	fn metrics_follow_the_path() {
		let track = Track::new(vec![
			TrackPoint::new(0.0, 0.0, Some(120.0)),
			TrackPoint::new(0.0, 0.5, None),
			TrackPoint::new(0.0, 1.0, Some(80.0)),
			TrackPoint::new(0.0, 1.0, Some(340.0)),
		]);

		assert!((track.distance_2d() - 111_195.0).abs() < 200.0);
		assert!((track.altitude_min() - 80.0).abs() < f64::EPSILON);
		assert!((track.altitude_max() - 340.0).abs() < f64::EPSILON);
	}

	#[test]
	fn empty_path_has_zero_metrics() {
		let track = Track::new(Vec::new());

		assert!(track.distance_2d().abs() < f64::EPSILON);
		assert!(track.altitude_min().abs() < f64::EPSILON);
		assert!(track.altitude_max().abs() < f64::EPSILON);
		assert!(track.bounding_box().is_empty());
	}

	#[test]
	fn set_path_recomputes_metrics() {
		let mut track = Track::from_metrics(10.0, 100.0, 200.0);
		track.set_path(vec![
			TrackPoint::new(10.0, 10.0, Some(5.0)),
			TrackPoint::new(10.0, 10.0, Some(15.0)),
		]);

		assert!(track.distance_2d().abs() < f64::EPSILON);
		assert!((track.altitude_min() - 5.0).abs() < f64::EPSILON);
		assert!((track.altitude_max() - 15.0).abs() < f64::EPSILON);
	}

	#[test]
	fn unregistered_track_has_no_name() {
		let mut track = Track::default();
		assert_eq!(track.display_name(), None);

		track.register(3, crate::Rgb::default());
		assert_eq!(track.key(), Some(3));
		assert_eq!(track.display_name().as_deref(), Some("track_3"));
	}
}
