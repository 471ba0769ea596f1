use geojson::Value;
use std::fmt::Display;

/// Geometry kind as named by a `geom_type` tag such as `"ST_Point"`.
///
/// The `ST_` prefix is optional. Anything that is not a known GeoJSON geometry
/// type ends up as [`GeomKind::Other`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomKind {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
	Other(String),
}

impl GeomKind {
	pub fn parse_tag(tag: &str) -> GeomKind {
		let name = tag.trim();
		let name = name.strip_prefix("ST_").unwrap_or(name);
		match name {
			"Point" => GeomKind::Point,
			"MultiPoint" => GeomKind::MultiPoint,
			"LineString" => GeomKind::LineString,
			"MultiLineString" => GeomKind::MultiLineString,
			"Polygon" => GeomKind::Polygon,
			"MultiPolygon" => GeomKind::MultiPolygon,
			"GeometryCollection" => GeomKind::GeometryCollection,
			_ => GeomKind::Other(tag.to_string()),
		}
	}

	pub fn of_value(value: &Value) -> GeomKind {
		match value {
			Value::Point(_) => GeomKind::Point,
			Value::MultiPoint(_) => GeomKind::MultiPoint,
			Value::LineString(_) => GeomKind::LineString,
			Value::MultiLineString(_) => GeomKind::MultiLineString,
			Value::Polygon(_) => GeomKind::Polygon,
			Value::MultiPolygon(_) => GeomKind::MultiPolygon,
			Value::GeometryCollection(_) => GeomKind::GeometryCollection,
		}
	}

	pub fn type_name(&self) -> &str {
		match self {
			GeomKind::Point => "Point",
			GeomKind::MultiPoint => "MultiPoint",
			GeomKind::LineString => "LineString",
			GeomKind::MultiLineString => "MultiLineString",
			GeomKind::Polygon => "Polygon",
			GeomKind::MultiPolygon => "MultiPolygon",
			GeomKind::GeometryCollection => "GeometryCollection",
			GeomKind::Other(tag) => tag,
		}
	}

	/// The tag the backend reports for this kind, e.g. `"ST_LineString"`.
	pub fn tag(&self) -> String {
		match self {
			GeomKind::Other(tag) => tag.clone(),
			kind => format!("ST_{}", kind.type_name()),
		}
	}
}

impl Display for GeomKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.type_name())
	}
}

/// The layer group a feature is rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerClass {
	Point,
	Line,
	Polygon,
}

impl LayerClass {
	/// Dispatch used by the editor: points, line-likes, and everything else as polygon.
	pub fn classify(tag: &str) -> LayerClass {
		match GeomKind::parse_tag(tag) {
			GeomKind::Point => LayerClass::Point,
			GeomKind::LineString | GeomKind::MultiLineString => LayerClass::Line,
			_ => LayerClass::Polygon,
		}
	}

	/// Dispatch used by the read-only viewer, which only tells points apart.
	pub fn classify_simple(tag: &str) -> LayerClass {
		match GeomKind::parse_tag(tag) {
			GeomKind::Point => LayerClass::Point,
			_ => LayerClass::Polygon,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("ST_Point", GeomKind::Point)]
	#[case("Point", GeomKind::Point)]
	#[case("ST_MultiPoint", GeomKind::MultiPoint)]
	#[case("ST_LineString", GeomKind::LineString)]
	#[case("ST_MultiLineString", GeomKind::MultiLineString)]
	#[case(" ST_Polygon ", GeomKind::Polygon)]
	#[case("ST_MultiPolygon", GeomKind::MultiPolygon)]
	#[case("ST_GeometryCollection", GeomKind::GeometryCollection)]
	#[case("ST_Circle", GeomKind::Other("ST_Circle".to_string()))]
	#[case("", GeomKind::Other(String::new()))]
	fn parse_tag(#[case] tag: &str, #[case] expected: GeomKind) {
		assert_eq!(GeomKind::parse_tag(tag), expected);
	}

	#[test]
	fn tag_of_value() {
		let value = Value::MultiLineString(vec![vec![vec![0.0, 0.0], vec![1.0, 1.0]]]);
		assert_eq!(GeomKind::of_value(&value).tag(), "ST_MultiLineString");
		assert_eq!(GeomKind::Other("weird".into()).tag(), "weird");
	}

	#[rstest]
	#[case("ST_Point", LayerClass::Point, LayerClass::Point)]
	#[case("ST_LineString", LayerClass::Line, LayerClass::Polygon)]
	#[case("ST_MultiLineString", LayerClass::Line, LayerClass::Polygon)]
	#[case("ST_Polygon", LayerClass::Polygon, LayerClass::Polygon)]
	#[case("ST_MultiPolygon", LayerClass::Polygon, LayerClass::Polygon)]
	#[case("ST_MultiPoint", LayerClass::Polygon, LayerClass::Polygon)]
	#[case("unknown", LayerClass::Polygon, LayerClass::Polygon)]
	fn classify(#[case] tag: &str, #[case] full: LayerClass, #[case] simple: LayerClass) {
		assert_eq!(LayerClass::classify(tag), full);
		assert_eq!(LayerClass::classify_simple(tag), simple);
	}
}
