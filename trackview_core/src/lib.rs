mod color;
mod config;
mod error;
mod event;
mod file;
mod files_list;
mod geo;
mod list_model;
mod poi;
mod track;

pub mod trace;

pub use color::{Palette, Rgb};
pub use config::Config;
pub use error::{ConfigError, Error};
pub use event::{Event, Observer, ObserverId};
pub use file::File;
pub use files_list::{Extrema, FilesList};
pub use geo::{Point, Rect, TrackPoint, haversine_distance};
pub use list_model::{ListModel, Role, Value};
pub use poi::Poi;
pub use track::{Extent, Track};
