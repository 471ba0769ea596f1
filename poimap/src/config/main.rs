use super::{ApiConfig, MapConfig, ServerConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// POI backend
	#[serde(default)]
	pub api: ApiConfig,

	/// Map view and editor settings
	#[serde(default)]
	pub map: MapConfig,

	/// Development API server
	#[serde(default)]
	pub server: ServerConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		// an empty document is null in YAML, not an empty mapping
		if text.trim().is_empty() {
			return Ok(Config::default());
		}
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}
}
