use crate::{Poi, Rect, Track};
use std::sync::Arc;

/// A loaded track file: its tracks, its waypoints and the area they cover.
#[derive(Clone, Debug)]
pub struct File {
	name: Arc<str>,
	tracks: Vec<Track>,
	pois: Vec<Poi>,
	bounding_box: Rect,
}

impl File {
	/// Creates a file whose bounding box covers every track point and waypoint.
	#[must_use]
	pub fn new(name: impl Into<Arc<str>>, tracks: Vec<Track>, pois: Vec<Poi>) -> Self {
		let bounding_box = tracks
			.iter()
			.map(Track::bounding_box)
			.fold(pois.iter().map(Poi::point).collect::<Rect>(), |acc, r| {
				acc.united(&r)
			});

		Self::with_bounding_box(name, tracks, pois, bounding_box)
	}

	#[must_use]
	pub fn with_bounding_box(
		name: impl Into<Arc<str>>,
		tracks: Vec<Track>,
		pois: Vec<Poi>,
		bounding_box: Rect,
	) -> Self {
		Self {
			name: name.into(),
			tracks,
			pois,
			bounding_box,
		}
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn tracks(&self) -> &[Track] {
		&self.tracks
	}

	#[must_use]
	pub fn pois(&self) -> &[Poi] {
		&self.pois
	}

	#[must_use]
	pub fn bounding_box(&self) -> Rect {
		self.bounding_box
	}

	pub(crate) fn tracks_mut(&mut self) -> &mut [Track] {
		&mut self.tracks
	}

	pub(crate) fn pois_mut(&mut self) -> &mut [Poi] {
		&mut self.pois
	}
}
