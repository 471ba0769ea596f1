//! Position and zoom of the visible map.
//!
//! Positions are projected to Web Mercator, normalized to `0..1` on both axes
//! (`y` grows to the south). At zoom `z` the whole world is `256 * 2^z` pixels wide.

use crate::config::MapConfig;
use poimap_core::GeoBBox;
use std::f64::consts::PI;

const TILE_SIZE: f64 = 256.0;
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Projects `(lng, lat)` to normalized Web Mercator coordinates.
pub fn project(lng: f64, lat: f64) -> (f64, f64) {
	let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
	let x = (lng + 180.0) / 360.0;
	let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
	(x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64) -> (f64, f64) {
	let lng = x * 360.0 - 180.0;
	let lat = (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees();
	(lng, lat)
}

/// Cuts `bbox` to the latitudes Web Mercator can show (about ±85.05°).
///
/// Positions closer to a pole are drawn at the edge of the world, so this is the
/// part of a box a fitted view can contain.
pub fn clamp_to_mercator(bbox: &GeoBBox) -> GeoBBox {
	let limit = unproject(0.0, 0.0).1;
	GeoBBox {
		y_min: bbox.y_min.clamp(-limit, limit),
		y_max: bbox.y_max.clamp(-limit, limit),
		..*bbox
	}
}

fn world_size(zoom: u8) -> f64 {
	TILE_SIZE * 2f64.powi(i32::from(zoom))
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
	/// `(lng, lat)`
	center: (f64, f64),
	zoom: u8,
	/// `(width, height)` in pixels
	viewport: (u32, u32),
	min_zoom: u8,
	max_zoom: u8,
}

impl MapView {
	pub fn new(center: (f64, f64), zoom: u8, viewport: (u32, u32), min_zoom: u8, max_zoom: u8) -> MapView {
		let max_zoom = max_zoom.max(min_zoom);
		MapView {
			center,
			zoom: zoom.clamp(min_zoom, max_zoom),
			viewport,
			min_zoom,
			max_zoom,
		}
	}

	pub fn from_config(config: &MapConfig) -> MapView {
		MapView::new(
			(config.center[0], config.center[1]),
			config.zoom,
			(config.viewport[0], config.viewport[1]),
			config.min_zoom,
			config.max_zoom,
		)
	}

	pub fn center(&self) -> (f64, f64) {
		self.center
	}

	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	pub fn set_view(&mut self, center: (f64, f64), zoom: u8) {
		self.center = center;
		self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
	}

	/// The area currently visible in the viewport.
	pub fn bounds(&self) -> GeoBBox {
		let (cx, cy) = project(self.center.0, self.center.1);
		let size = world_size(self.zoom);
		let half_w = f64::from(self.viewport.0) / 2.0 / size;
		let half_h = f64::from(self.viewport.1) / 2.0 / size;

		let (west, north) = unproject(cx - half_w, (cy - half_h).max(0.0));
		let (east, south) = unproject(cx + half_w, (cy + half_h).min(1.0));
		GeoBBox {
			x_min: west.max(-180.0),
			y_min: south,
			x_max: east.min(180.0),
			y_max: north,
		}
	}

	/// The largest integer zoom at which `bbox` fits into the viewport minus `padding` on every side.
	///
	/// A box without extent (a single point) gets the maximum zoom.
	pub fn zoom_for_bounds(&self, bbox: &GeoBBox, padding: u32) -> u8 {
		let (x0, y0) = project(bbox.x_min, bbox.y_max);
		let (x1, y1) = project(bbox.x_max, bbox.y_min);
		let dx = (x1 - x0).abs() * TILE_SIZE;
		let dy = (y1 - y0).abs() * TILE_SIZE;

		let available_w = (f64::from(self.viewport.0) - 2.0 * f64::from(padding)).max(1.0);
		let available_h = (f64::from(self.viewport.1) - 2.0 * f64::from(padding)).max(1.0);

		let scale_w = if dx > 0.0 { available_w / dx } else { f64::INFINITY };
		let scale_h = if dy > 0.0 { available_h / dy } else { f64::INFINITY };
		let scale = scale_w.min(scale_h);

		if scale.is_infinite() {
			return self.max_zoom;
		}
		let zoom = scale.log2().floor();
		zoom.clamp(f64::from(self.min_zoom), f64::from(self.max_zoom)) as u8
	}

	/// Centers the view on `bbox` and zooms in as far as it still fits.
	///
	/// Only the part within [`clamp_to_mercator`] is fitted; a POI beyond ±85.05°
	/// latitude stays outside the visible bounds.
	pub fn fit_bounds(&mut self, bbox: &GeoBBox, padding: u32) {
		let bbox = &clamp_to_mercator(bbox);
		let zoom = self.zoom_for_bounds(bbox, padding);
		let (x0, y0) = project(bbox.x_min, bbox.y_max);
		let (x1, y1) = project(bbox.x_max, bbox.y_min);
		let center = unproject((x0 + x1) / 2.0, (y0 + y1) / 2.0);
		log::debug!("fit view to {bbox:?}: center {center:?}, zoom {zoom}");
		self.set_view(center, zoom);
	}
}
