use crate::session::EditorMode;
use serde::Deserialize;

/// Initial view, viewport size, base tiles and editor mode.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
	/// Initial center as `[longitude, latitude]`.
	#[serde(default = "default_center")]
	pub center: [f64; 2],

	#[serde(default = "default_zoom")]
	pub zoom: u8,

	#[serde(default)]
	pub min_zoom: u8,

	#[serde(default = "default_max_zoom")]
	pub max_zoom: u8,

	/// Size of the map element in pixels, `[width, height]`.
	#[serde(default = "default_viewport")]
	pub viewport: [u32; 2],

	/// Margin in pixels kept free around the POIs when the view is fitted to them.
	#[serde(default = "default_fit_padding")]
	pub fit_padding: u32,

	/// `editor` (draw and delete) or `viewer` (read only).
	#[serde(default)]
	pub mode: EditorMode,

	#[serde(default)]
	pub tiles: TileConfig,
}

fn default_center() -> [f64; 2] {
	[0.0, 20.0]
}
fn default_zoom() -> u8 {
	2
}
fn default_max_zoom() -> u8 {
	18
}
fn default_viewport() -> [u32; 2] {
	[1024, 768]
}
fn default_fit_padding() -> u32 {
	50
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			center: default_center(),
			zoom: default_zoom(),
			min_zoom: 0,
			max_zoom: default_max_zoom(),
			viewport: default_viewport(),
			fit_padding: default_fit_padding(),
			mode: EditorMode::default(),
			tiles: TileConfig::default(),
		}
	}
}

/// The base tile layer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TileConfig {
	/// URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
	#[serde(default = "default_tile_url")]
	pub url: String,

	#[serde(default = "default_attribution")]
	pub attribution: String,

	#[serde(default = "default_tile_max_zoom")]
	pub max_zoom: u8,
}

fn default_tile_url() -> String {
	String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
}
fn default_attribution() -> String {
	String::from("&copy; OpenStreetMap contributors")
}
fn default_tile_max_zoom() -> u8 {
	19
}

impl Default for TileConfig {
	fn default() -> Self {
		Self {
			url: default_tile_url(),
			attribution: default_attribution(),
			max_zoom: default_tile_max_zoom(),
		}
	}
}
