use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
	fmt::{Display, Formatter},
	ops::Index,
	str::FromStr,
	sync::Arc,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	#[must_use]
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Builds a color from its `0xrrggbb` representation, ignoring the top byte.
	#[must_use]
	pub const fn from_hex(hex: u32) -> Self {
		Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
	}

	#[must_use]
	pub const fn to_hex(self) -> u32 {
		((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
	}
}

impl Display for Rgb {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:06x}", self.to_hex())
	}
}

impl FromStr for Rgb {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ConfigError::InvalidColor(s.to_owned());

		let hex = s.strip_prefix('#').ok_or_else(invalid)?;
		if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(invalid());
		}

		u32::from_str_radix(hex, 16)
			.map(Self::from_hex)
			.map_err(|_| invalid())
	}
}

impl TryFrom<String> for Rgb {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Rgb> for String {
	fn from(value: Rgb) -> Self {
		value.to_string()
	}
}

/// The colors handed out to tracks, indexed by track key modulo the palette length.
///
/// A palette is never empty.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette(Arc<[Rgb]>);

impl Default for Palette {
	fn default() -> Self {
		Self(Arc::new([
			Rgb::from_hex(0x0020_9fdf),
			Rgb::from_hex(0x0099_ca53),
			Rgb::from_hex(0x00f6_a625),
			Rgb::from_hex(0x006d_5fd5),
			Rgb::from_hex(0x00bf_593e),
		]))
	}
}

impl Palette {
	pub fn new(colors: impl IntoIterator<Item = Rgb>) -> Result<Self, ConfigError> {
		let colors = colors.into_iter().collect::<Arc<[_]>>();

		if colors.is_empty() {
			return Err(ConfigError::EmptyPalette);
		}

		Ok(Self(colors))
	}

	/// The color for the track holding `key`.
	#[must_use]
	pub fn color_for(&self, key: usize) -> Rgb {
		self.0[key % self.0.len()]
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		false
	}

	pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
		self.0.iter().copied()
	}
}

impl Index<usize> for Palette {
	type Output = Rgb;

	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}

impl TryFrom<Vec<Rgb>> for Palette {
	type Error = ConfigError;

	fn try_from(value: Vec<Rgb>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<Palette> for Vec<Rgb> {
	fn from(value: Palette) -> Self {
		value.0.to_vec()
	}
}
