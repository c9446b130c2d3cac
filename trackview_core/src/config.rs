use crate::{ConfigError, Palette};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
	fs::{read_to_string, write},
	io,
	path::Path,
};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
	/// colors assigned to tracks, picked by track key modulo the palette length
	pub palette: Palette,
}

impl Config {
	pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(s)?)
	}

	pub fn to_toml(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string(self)?)
	}

	/// Reads the config at `path`, falling back to the defaults if there is no file yet.
	pub fn read(path: &Path) -> Result<Self, ConfigError> {
		match read_to_string(path) {
			Ok(s) => Self::from_toml(&s),
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				info!("no config at {}, using defaults", path.display());
				Ok(Self::default())
			}
			Err(err) => Err(err.into()),
		}
	}

	pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
		write(path, self.to_toml()?)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::Config;
	use crate::{ConfigError, Palette, Rgb};

	#[test]
	fn empty_document_yields_defaults() {
		assert_eq!(Config::from_toml("").unwrap(), Config::default());
	}

	#[test]
	fn custom_palette() {
		let config = Config::from_toml(r##"palette = ["#ff0000", "#00ff00"]"##).unwrap();

		assert_eq!(
			config.palette,
			Palette::new([Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]).unwrap()
		);
	}

	#[test]
	fn invalid_palettes_are_rejected() {
		assert!(matches!(
			Config::from_toml("palette = []"),
			Err(ConfigError::Parse(_))
		));
		assert!(matches!(
			Config::from_toml(r#"palette = ["red"]"#),
			Err(ConfigError::Parse(_))
		));
	}

	#[test]
	fn missing_file_reads_as_default() {
		let dir = tempfile::tempdir().unwrap();

		let config = Config::read(&dir.path().join("trackview.toml")).unwrap();
		assert_eq!(config, Config::default());
	}

	#[test]
	fn write_then_read() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("trackview.toml");

		let config = Config {
			palette: Palette::new([Rgb::from_hex(0x0012_3456)]).unwrap(),
		};
		config.write(&path).unwrap();

		assert_eq!(Config::read(&path).unwrap(), config);
	}
}
