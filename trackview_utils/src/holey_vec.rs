use std::borrow::Borrow;

/// A vector of optional slots, addressed by small integer keys.
///
/// Removing an element leaves a hole behind, and [`HoleyVec::push`] fills the
/// lowest hole first, so the keys in use stay densely packed towards zero.
#[derive(Debug)]
pub struct HoleyVec<T>(Vec<Option<T>>);

impl<T> Default for HoleyVec<T> {
	fn default() -> Self {
		Self(Vec::new())
	}
}

impl<T> HoleyVec<T> {
	pub fn get<I>(&self, index: I) -> Option<&T>
	where
		I: Borrow<usize>,
	{
		self.0.get(*index.borrow()).and_then(Option::as_ref)
	}

	pub fn get_mut<I>(&mut self, index: I) -> Option<&mut T>
	where
		I: Borrow<usize>,
	{
		self.0.get_mut(*index.borrow()).and_then(Option::as_mut)
	}

	pub fn contains_key<I>(&self, index: I) -> bool
	where
		I: Borrow<usize>,
	{
		self.get(index).is_some()
	}

	/// The smallest key that is not currently occupied.
	#[must_use]
	pub fn first_hole(&self) -> usize {
		self.0
			.iter()
			.position(Option::is_none)
			.unwrap_or(self.0.len())
	}

	/// Stores `elem` under [`HoleyVec::first_hole`] and returns that key.
	pub fn push(&mut self, elem: T) -> usize {
		let key = self.first_hole();
		self.insert(key, elem);
		key
	}

	pub fn insert<I>(&mut self, index: I, elem: T) -> Option<T>
	where
		I: Borrow<usize>,
	{
		let index = *index.borrow();
		if index >= self.0.len() {
			self.0.resize_with(index + 1, || None);
		}

		self.0[index].replace(elem)
	}

	pub fn remove<I>(&mut self, index: I) -> Option<T>
	where
		I: Borrow<usize>,
	{
		let removed = self.0.get_mut(*index.borrow()).and_then(Option::take);
		self.trim();
		removed
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Occupied slots, in key order.
	pub fn values(&self) -> impl Iterator<Item = &T> {
		self.0.iter().flatten()
	}

	// trailing holes are never observable, dropping them keeps `is_empty` exact
	fn trim(&mut self) {
		while self.0.last().is_some_and(Option::is_none) {
			self.0.pop();
		}
	}
}
