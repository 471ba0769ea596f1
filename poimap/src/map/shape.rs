use geojson::Geometry;
use poimap_core::{GeoBBox, PoiFeature, ShapeStyle};
use std::fmt::Display;

/// Identifies a rendered shape across all layer groups of a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(pub u64);

impl Display for ShapeHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A geometry drawn on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
	pub handle: ShapeHandle,
	pub geometry: Geometry,
	pub style: ShapeStyle,
	pub popup: Option<String>,
	/// The POI the shape was rendered from. Shapes drawn by the user have none.
	pub feature: Option<PoiFeature>,
}

impl Shape {
	pub fn new(handle: ShapeHandle, geometry: Geometry, style: ShapeStyle) -> Shape {
		Shape {
			handle,
			geometry,
			style,
			popup: None,
			feature: None,
		}
	}

	pub fn with_popup(mut self, popup: String) -> Shape {
		self.popup = Some(popup);
		self
	}

	pub fn with_feature(mut self, feature: PoiFeature) -> Shape {
		self.feature = Some(feature);
		self
	}

	/// The backend id of the POI behind this shape, if it was ever saved.
	pub fn poi_id(&self) -> Option<u64> {
		self.feature.as_ref().and_then(|f| f.id)
	}

	pub fn bounds(&self) -> Option<GeoBBox> {
		GeoBBox::from_geometry(&self.geometry.value)
	}
}
