//! Fixed visual styles of the shapes on the map.

/// Style of a circular point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
	pub radius: f64,
	pub color: &'static str,
	pub weight: f64,
	pub opacity: f64,
	pub fill_color: &'static str,
	pub fill_opacity: f64,
}

impl MarkerStyle {
	/// Every POI point is drawn with this style.
	pub const POI: MarkerStyle = MarkerStyle {
		radius: 8.0,
		color: "#000000",
		weight: 1.0,
		opacity: 1.0,
		fill_color: "#ff7800",
		fill_opacity: 0.8,
	};
}

/// Style of a line or of a polygon outline and fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStyle {
	pub color: &'static str,
	pub weight: f64,
	pub opacity: f64,
	pub fill_color: Option<&'static str>,
	pub fill_opacity: f64,
	pub clickable: bool,
}

impl PathStyle {
	pub const POI_LINE: PathStyle = PathStyle {
		color: "#e74c3c",
		weight: 4.0,
		opacity: 0.8,
		fill_color: None,
		fill_opacity: 0.0,
		clickable: true,
	};

	pub const DRAW_POLYLINE: PathStyle = PathStyle {
		color: "#f357a1",
		weight: 4.0,
		opacity: 0.5,
		fill_color: None,
		fill_opacity: 0.0,
		clickable: true,
	};

	pub const DRAW_POLYGON: PathStyle = PathStyle {
		color: "#bada55",
		weight: 4.0,
		opacity: 0.5,
		fill_color: Some("#bada55"),
		fill_opacity: 0.2,
		clickable: true,
	};

	pub const DRAW_RECTANGLE: PathStyle = PathStyle {
		color: "#3388ff",
		weight: 4.0,
		opacity: 0.5,
		fill_color: Some("#3388ff"),
		fill_opacity: 0.2,
		clickable: false,
	};

	/// Shown by the drawing tool while a polygon would intersect itself.
	pub const DRAW_ERROR: PathStyle = PathStyle {
		color: "#e1e100",
		weight: 4.0,
		opacity: 0.5,
		fill_color: None,
		fill_opacity: 0.0,
		clickable: false,
	};

	/// Polygon style for a fill color taken from the [`ColorCycle`](super::ColorCycle).
	pub fn poi_polygon(fill_color: &'static str) -> PathStyle {
		PathStyle {
			color: fill_color,
			weight: 2.0,
			opacity: 1.0,
			fill_color: Some(fill_color),
			fill_opacity: 0.5,
			clickable: true,
		}
	}
}

/// How a shape is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeStyle {
	/// Default pin marker, used for freshly drawn markers.
	Marker,
	CircleMarker(MarkerStyle),
	Path(PathStyle),
}

impl ShapeStyle {
	/// The main color of the shape, if it has one.
	pub fn color(&self) -> Option<&'static str> {
		match self {
			ShapeStyle::Marker => None,
			ShapeStyle::CircleMarker(m) => Some(m.fill_color),
			ShapeStyle::Path(p) => Some(p.fill_color.unwrap_or(p.color)),
		}
	}
}
