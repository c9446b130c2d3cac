use crate::{
	Config, Error, Event, Extent, File, ListModel, Observer, ObserverId, Palette, Poi, Role,
	Track, TrackPoint, Value,
};
use log::{debug, trace, warn};
use std::mem::take;
use trackview_utils::{HoleyVec, NoDebug};

/// The chart bounds spanned by every registered track.
///
/// `x` is the horizontal track distance, `y` the altitude. `x_min` is always zero:
/// distances are measured from the start of each track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extrema {
	pub x_min: f64,
	pub x_max: f64,
	pub y_min: f64,
	pub y_max: f64,
}

impl Extrema {
	fn seed(&mut self, extent: Extent) {
		self.x_max = extent.distance_2d;
		self.y_min = extent.altitude_min;
		self.y_max = extent.altitude_max;
	}

	fn fold(&mut self, extent: Extent) {
		self.x_max = self.x_max.max(extent.distance_2d);
		self.y_min = self.y_min.min(extent.altitude_min);
		self.y_max = self.y_max.max(extent.altitude_max);
	}

	fn reset(&mut self) {
		self.x_max = 0.0;
		self.y_min = 0.0;
		self.y_max = 0.0;
	}
}

/// The loaded files, exposed row by row to the file browser.
///
/// Every track and waypoint gets the smallest key that is free in its own namespace,
/// and tracks are colored by their key. Keys are released when their file is removed.
#[derive(Debug)]
pub struct FilesList {
	files: Vec<File>,
	palette: Palette,
	/// the extent of each registered track, by track key
	tracks: HoleyVec<Extent>,
	pois: HoleyVec<()>,
	extrema: Extrema,
	observers: Vec<(ObserverId, NoDebug<Box<dyn Observer>>)>,
	next_observer: usize,
}

impl Default for FilesList {
	fn default() -> Self {
		Self::new()
	}
}

impl FilesList {
	#[must_use]
	pub fn new() -> Self {
		Self::with_palette(Palette::default())
	}

	#[must_use]
	pub fn with_config(config: &Config) -> Self {
		Self::with_palette(config.palette.clone())
	}

	#[must_use]
	pub fn with_palette(palette: Palette) -> Self {
		Self {
			files: Vec::new(),
			palette,
			tracks: HoleyVec::default(),
			pois: HoleyVec::default(),
			extrema: Extrema::default(),
			observers: Vec::new(),
			next_observer: 0,
		}
	}

	pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
		let id = ObserverId(self.next_observer);
		self.next_observer += 1;
		self.observers.push((id, NoDebug(Box::new(observer))));
		id
	}

	/// Returns whether an observer was registered under `id`.
	pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
		let len = self.observers.len();
		self.observers.retain(|(i, _)| *i != id);
		len != self.observers.len()
	}

	#[must_use]
	pub fn count(&self) -> usize {
		self.files.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&File> {
		self.files.get(index)
	}

	pub fn files(&self) -> impl Iterator<Item = &File> {
		self.files.iter()
	}

	#[must_use]
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	#[must_use]
	pub fn track(&self, key: usize) -> Option<&Track> {
		if !self.tracks.contains_key(key) {
			return None;
		}

		self.files
			.iter()
			.flat_map(File::tracks)
			.find(|track| track.key() == Some(key))
	}

	#[must_use]
	pub fn poi(&self, key: usize) -> Option<&Poi> {
		if !self.pois.contains_key(key) {
			return None;
		}

		self.files
			.iter()
			.flat_map(File::pois)
			.find(|poi| poi.key() == Some(key))
	}

	#[must_use]
	pub fn extrema(&self) -> Extrema {
		self.extrema
	}

	#[must_use]
	pub fn x_min(&self) -> f64 {
		self.extrema.x_min
	}

	#[must_use]
	pub fn x_max(&self) -> f64 {
		self.extrema.x_max
	}

	#[must_use]
	pub fn y_min(&self) -> f64 {
		self.extrema.y_min
	}

	#[must_use]
	pub fn y_max(&self) -> f64 {
		self.extrema.y_max
	}

	/// Appends `file` as the last row, registering its tracks and waypoints.
	///
	/// Passing `None` does nothing.
	pub fn append(&mut self, file: impl Into<Option<File>>) {
		let Some(mut file) = file.into() else {
			return;
		};

		let row = self.files.len();
		self.notify(&Event::RowsAboutToBeInserted(row..=row));

		for track in file.tracks_mut() {
			let extent = track.extent();

			if self.tracks.is_empty() {
				self.extrema.seed(extent);
			} else {
				self.extrema.fold(extent);
			}

			let key = self.tracks.push(extent);
			let color = self.palette.color_for(key);
			track.register(key, color);
			trace!("registered track_{key} with color {color}");

			self.notify(&Event::ExtremaChanged);
		}

		for poi in file.pois_mut() {
			let key = self.pois.push(());
			poi.register(key);
			trace!("registered poi_{key}");
		}

		debug!("appending {:?} at row {row}", file.name());
		self.files.push(file);

		self.notify(&Event::RowsInserted(row..=row));
		self.notify(&Event::CountChanged);

		let mut observers = take(&mut self.observers);
		dispatch(&mut observers, self, &Event::FileAppended(&self.files[row]));
		self.observers = observers;
	}

	/// Removes the file at `index`, releasing the keys of its tracks and waypoints.
	///
	/// Out of range indices are ignored.
	pub fn remove(&mut self, index: usize) {
		if index >= self.files.len() {
			return;
		}

		self.notify(&Event::RowsAboutToBeRemoved(index..=index));

		let track_keys = self.files[index]
			.tracks()
			.iter()
			.filter_map(Track::key)
			.collect::<Vec<_>>();
		for key in track_keys {
			self.tracks.remove(key);
			trace!("released track_{key}");

			self.update_extrema();
		}

		for key in self.files[index].pois().iter().filter_map(Poi::key) {
			self.pois.remove(key);
			trace!("released poi_{key}");
		}

		let file = self.files.remove(index);
		debug!("removed {:?} from row {index}", file.name());

		self.notify(&Event::RowsRemoved(index..=index));
		self.notify(&Event::CountChanged);
		self.notify(&Event::FileRemoved(&file));
	}

	/// Replaces the path of the registered track with the given key and updates the
	/// extrema accordingly.
	pub fn set_track_path(&mut self, key: usize, path: Vec<TrackPoint>) -> Result<(), Error> {
		let Some(extent) = self.tracks.get_mut(key) else {
			warn!("path change for unregistered track_{key}");
			return Err(Error::UnknownTrack(key));
		};

		let track = self
			.files
			.iter_mut()
			.flat_map(File::tracks_mut)
			.find(|track| track.key() == Some(key))
			.ok_or(Error::UnknownTrack(key))?;

		track.set_path(path);
		*extent = track.extent();

		self.update_extrema();

		Ok(())
	}

	fn notify(&mut self, event: &Event<'_>) {
		let mut observers = take(&mut self.observers);
		dispatch(&mut observers, self, event);
		self.observers = observers;
	}

	/// Recomputes the extrema from scratch over all registered tracks.
	fn update_extrema(&mut self) {
		{
			let mut extents = self.tracks.values().copied();

			if let Some(first) = extents.next() {
				self.extrema.seed(first);
				extents.for_each(|extent| self.extrema.fold(extent));
			} else {
				self.extrema.reset();
			}
		}

		self.notify(&Event::ExtremaChanged);
	}
}

impl ListModel for FilesList {
	fn row_count(&self) -> usize {
		self.count()
	}

	fn data(&self, row: usize, role: Role) -> Option<Value<'_>> {
		let file = self.files.get(row)?;

		Some(match role {
			Role::Name => Value::Name(file.name()),
			Role::Tracks => Value::Tracks(file.tracks()),
			Role::Pois => Value::Pois(file.pois()),
			Role::BoundingBox => Value::BoundingBox(file.bounding_box()),
		})
	}
}

// observers are taken out of the list while they run, so they can read it
fn dispatch(
	observers: &mut [(ObserverId, NoDebug<Box<dyn Observer>>)],
	list: &FilesList,
	event: &Event<'_>,
) {
	for (_, observer) in observers {
		observer.notify(list, event);
	}
}
