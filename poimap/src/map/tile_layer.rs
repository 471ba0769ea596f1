use crate::config::TileConfig;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// The base map tiles underneath all POIs.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
	pub url_template: String,
	pub attribution: String,
	pub max_zoom: u8,
}

impl TileLayer {
	pub fn from_config(config: &TileConfig) -> TileLayer {
		TileLayer {
			url_template: config.url.clone(),
			attribution: config.attribution.clone(),
			max_zoom: config.max_zoom,
		}
	}

	/// URL of a single tile. Subdomains rotate with the tile position.
	pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
		let subdomain = SUBDOMAINS[((x as usize) + (y as usize)) % SUBDOMAINS.len()];
		self
			.url_template
			.replace("{s}", subdomain)
			.replace("{z}", &z.to_string())
			.replace("{x}", &x.to_string())
			.replace("{y}", &y.to_string())
	}
}
