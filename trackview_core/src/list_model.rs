use crate::{Poi, Rect, Track};
use log::warn;
use strum::{EnumIter, EnumString, FromRepr, IntoEnumIterator as _, IntoStaticStr};

#[derive(Clone, Copy, Debug, EnumIter, EnumString, Eq, FromRepr, Hash, IntoStaticStr, PartialEq)]
#[repr(i32)]
pub enum Role {
	// ids below 0x100 are reserved by presentation layers
	#[strum(serialize = "name")]
	Name = 0x101,
	#[strum(serialize = "tracks")]
	Tracks,
	#[strum(serialize = "pois")]
	Pois,
	#[strum(serialize = "boundingBox")]
	BoundingBox,
}

impl Role {
	#[must_use]
	pub const fn id(self) -> i32 {
		self as i32
	}

	#[must_use]
	pub fn name(self) -> &'static str {
		self.into()
	}
}

#[derive(Clone, Copy, Debug)]
pub enum Value<'a> {
	Name(&'a str),
	Tracks(&'a [Track]),
	Pois(&'a [Poi]),
	BoundingBox(Rect),
}

/// A flat list whose rows are read one role at a time.
pub trait ListModel {
	fn row_count(&self) -> usize;

	/// `None` if `row` is out of range.
	fn data(&self, row: usize, role: Role) -> Option<Value<'_>>;

	/// Role ids paired with the names presentation layers bind to.
	fn role_names(&self) -> Vec<(i32, &'static str)> {
		Role::iter().map(|role| (role.id(), role.name())).collect()
	}

	fn data_by_id(&self, row: usize, role_id: i32) -> Option<Value<'_>> {
		let Some(role) = Role::from_repr(role_id) else {
			warn!("no role with id {role_id}");
			return None;
		};

		self.data(row, role)
	}

	fn data_by_name(&self, row: usize, role_name: &str) -> Option<Value<'_>> {
		let Ok(role) = role_name.parse::<Role>() else {
			warn!("no role named {role_name:?}");
			return None;
		};

		self.data(row, role)
	}
}
