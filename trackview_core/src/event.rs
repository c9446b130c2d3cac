use crate::{File, FilesList};
use std::ops::RangeInclusive;

/// A change to a [`FilesList`](crate::FilesList), delivered synchronously to every observer.
#[derive(Clone, Debug)]
pub enum Event<'a> {
	RowsAboutToBeInserted(RangeInclusive<usize>),
	RowsInserted(RangeInclusive<usize>),
	RowsAboutToBeRemoved(RangeInclusive<usize>),
	RowsRemoved(RangeInclusive<usize>),
	CountChanged,
	/// the extrema may have changed, query them again
	ExtremaChanged,
	FileAppended(&'a File),
	/// the file is dropped after this event has been delivered
	FileRemoved(&'a File),
}

/// Receives every [`Event`] together with the list it happened to, already updated.
pub trait Observer: Send {
	fn notify(&mut self, list: &FilesList, event: &Event<'_>);
}

impl<F> Observer for F
where
	F: FnMut(&FilesList, &Event<'_>) + Send,
{
	fn notify(&mut self, list: &FilesList, event: &Event<'_>) {
		self(list, event);
	}
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObserverId(pub(crate) usize);
