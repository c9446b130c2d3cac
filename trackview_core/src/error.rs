use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("no track is registered under key {0}")]
	UnknownTrack(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to access the config file: {0}")]
	Io(#[from] io::Error),
	#[error("failed to parse the config file: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("failed to serialize the config: {0}")]
	Serialize(#[from] toml::ser::Error),
	#[error("invalid color {0:?}, expected \"#rrggbb\"")]
	InvalidColor(String),
	#[error("the track palette needs at least one color")]
	EmptyPalette,
}
