use serde::Deserialize;
use std::time::Duration;

/// Location of the POI backend.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
	/// Base URL under which `api/pois` is served.
	/// Defaults to `http://localhost:5000/`.
	#[serde(default = "default_base_url")]
	pub base_url: String,

	/// Optional request timeout in seconds. Without it, requests wait for the transport.
	#[serde(default)]
	pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
	String::from("http://localhost:5000/")
}

impl ApiConfig {
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_seconds.map(Duration::from_secs)
	}

	pub fn override_optional_base_url(&mut self, base_url: Option<&str>) {
		if let Some(base_url) = base_url {
			self.base_url = base_url.to_string();
		}
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: default_base_url(),
			timeout_seconds: None,
		}
	}
}
