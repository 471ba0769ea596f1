use anyhow::{Result, ensure};
use geojson::Value;
use std::fmt::Debug;

/// A geographical bounding box (`GeoBBox`) represents a rectangular area on a map
/// defined by its minimum and maximum longitude (x) and latitude (y) coordinates.
///
/// The bounding box is defined by four `f64` values:
/// - `x_min` (west): Minimum longitude.
/// - `y_min` (south): Minimum latitude.
/// - `x_max` (east): Maximum longitude.
/// - `y_max` (north): Maximum latitude.
///
/// # Examples
///
/// ## Expanding a bounding box
/// ```
/// use poimap_core::GeoBBox;
///
/// let mut bbox1 = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// let bbox2 = GeoBBox::new(-12.0, -3.0, 8.0, 6.0).unwrap();
/// bbox1.extend(&bbox2);
/// assert_eq!(bbox1.as_tuple(), (-12.0, -5.0, 10.0, 6.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north`.
	///
	/// Fails if a value lies outside of WGS84 or if min and max are swapped.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	/// A zero-sized box around a single position.
	pub fn from_point(x: f64, y: f64) -> GeoBBox {
		GeoBBox {
			x_min: x,
			y_min: y,
			x_max: x,
			y_max: y,
		}
	}

	/// Computes the bounding box of all positions of a GeoJSON geometry value.
	///
	/// Returns `None` for geometries without any position, e.g. an empty
	/// `GeometryCollection`.
	///
	/// ```
	/// use geojson::Value;
	/// use poimap_core::GeoBBox;
	///
	/// let line = Value::LineString(vec![vec![13.3, 52.5], vec![13.5, 52.4]]);
	/// let bbox = GeoBBox::from_geometry(&line).unwrap();
	/// assert_eq!(bbox.as_tuple(), (13.3, 52.4, 13.5, 52.5));
	/// ```
	pub fn from_geometry(value: &Value) -> Option<GeoBBox> {
		let mut bbox: Option<GeoBBox> = None;
		visit_positions(value, &mut |x, y| match bbox.as_mut() {
			Some(b) => b.extend_point(x, y),
			None => bbox = Some(GeoBBox::from_point(x, y)),
		});
		bbox
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// Expands the current bounding box in place so that it includes the area
	/// covered by `other`.
	pub fn extend(&mut self, other: &GeoBBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Non-mutating version of [`extend`](Self::extend).
	#[must_use]
	pub fn extended(mut self, other: &GeoBBox) -> GeoBBox {
		self.extend(other);
		self
	}

	pub fn extend_point(&mut self, x: f64, y: f64) {
		self.x_min = self.x_min.min(x);
		self.y_min = self.y_min.min(y);
		self.x_max = self.x_max.max(x);
		self.y_max = self.y_max.max(y);
	}

	/// Returns `true` if `other` lies completely within `self` (edges included).
	pub fn contains(&self, other: &GeoBBox) -> bool {
		self.x_min <= other.x_min && self.y_min <= other.y_min && self.x_max >= other.x_max && self.y_max >= other.y_max
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.x_min >= -180., "x_min ({}) must be >= -180", self.x_min);
		ensure!(self.y_min >= -90., "y_min ({}) must be >= -90", self.y_min);
		ensure!(self.x_max <= 180., "x_max ({}) must be <= 180", self.x_max);
		ensure!(self.y_max <= 90., "y_max ({}) must be <= 90", self.y_max);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

/// Calls `f(x, y)` for every position of a geometry, recursing into collections.
/// Positions with fewer than two ordinates are ignored.
pub fn visit_positions(value: &Value, f: &mut impl FnMut(f64, f64)) {
	fn line(positions: &[Vec<f64>], f: &mut impl FnMut(f64, f64)) {
		for p in positions {
			if p.len() >= 2 {
				f(p[0], p[1]);
			}
		}
	}

	match value {
		Value::Point(p) => line(std::slice::from_ref(p), f),
		Value::MultiPoint(ps) | Value::LineString(ps) => line(ps, f),
		Value::MultiLineString(lines) | Value::Polygon(lines) => lines.iter().for_each(|l| line(l, f)),
		Value::MultiPolygon(polygons) => polygons.iter().flatten().for_each(|l| line(l, f)),
		Value::GeometryCollection(geometries) => geometries.iter().for_each(|g| visit_positions(&g.value, f)),
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl TryFrom<[f64; 4]> for GeoBBox {
	type Error = anyhow::Error;

	fn try_from(input: [f64; 4]) -> Result<Self> {
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}
