use std::{
	fmt::{Debug, Formatter},
	ops::{Deref, DerefMut},
};

/// Wraps values that can't or shouldn't be printed, such as boxed callbacks.
#[derive(Clone, Copy, Default)]
pub struct NoDebug<T>(pub T);

impl<T> Debug for NoDebug<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("...")
	}
}

impl<T> Deref for NoDebug<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> DerefMut for NoDebug<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl<T> From<T> for NoDebug<T> {
	fn from(value: T) -> Self {
		Self(value)
	}
}
