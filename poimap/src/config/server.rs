use serde::Deserialize;
use std::net::IpAddr;

/// Address of the development API server.
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
	/// IP address to bind to. Defaults to `127.0.0.1`.
	#[serde(default)]
	pub ip: Option<IpAddr>,

	/// Port to listen on. Defaults to `5000`.
	#[serde(default)]
	pub port: Option<u16>,
}

impl ServerConfig {
	pub fn ip(&self) -> IpAddr {
		self.ip.unwrap_or(IpAddr::from([127, 0, 0, 1]))
	}

	pub fn port(&self) -> u16 {
		self.port.unwrap_or(5000)
	}

	pub fn override_optional_ip(&mut self, ip: Option<IpAddr>) {
		if ip.is_some() {
			self.ip = ip;
		}
	}

	pub fn override_optional_port(&mut self, port: Option<u16>) {
		if port.is_some() {
			self.port = port;
		}
	}
}
