use super::{GeomKind, PoiAttributes};
use anyhow::{Result, anyhow, bail};
use geojson::Geometry;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The descriptive part of a POI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoiProperties {
	pub name: Option<String>,
	pub poi_type: Option<String>,
	pub address: Option<String>,
	/// Geometry-kind tag assigned by the backend, e.g. `"ST_Polygon"`.
	pub geom_type: String,
	pub attributes: PoiAttributes,
}

/// A point of interest as delivered by `GET /api/pois`: a GeoJSON feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeatureWire", into = "FeatureWire")]
pub struct PoiFeature {
	pub id: Option<u64>,
	pub geometry: Geometry,
	pub properties: PoiProperties,
}

impl PoiFeature {
	/// Creates a feature whose `geom_type` tag is derived from the geometry.
	pub fn new(geometry: Geometry) -> PoiFeature {
		let geom_type = GeomKind::of_value(&geometry.value).tag();
		PoiFeature {
			id: None,
			geometry,
			properties: PoiProperties {
				geom_type,
				..PoiProperties::default()
			},
		}
	}

	pub fn from_json_str(json: &str) -> Result<PoiFeature> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

#[derive(Serialize, Deserialize)]
struct FeatureWire {
	#[serde(rename = "type")]
	object_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	id: Option<JsonValue>,
	#[serde(default)]
	geometry: Option<Geometry>,
	#[serde(default)]
	properties: Option<PropertiesWire>,
}

#[derive(Default, Serialize, Deserialize)]
struct PropertiesWire {
	#[serde(default)]
	id: Option<JsonValue>,
	#[serde(default)]
	name: Option<String>,
	#[serde(default)]
	poi_type: Option<String>,
	#[serde(default)]
	address: Option<String>,
	#[serde(default)]
	geom_type: Option<String>,
	#[serde(default)]
	properties: Option<PoiAttributes>,
}

/// Ids arrive as numbers or as numeric strings.
fn parse_id(value: &JsonValue) -> Result<u64> {
	match value {
		JsonValue::Number(n) => n.as_u64().ok_or_else(|| anyhow!("id must be a positive integer, but is {n}")),
		JsonValue::String(s) => s.parse().map_err(|_| anyhow!("id must be an integer, but is '{s}'")),
		other => bail!("id must be a number or a string, but is {other}"),
	}
}

impl TryFrom<FeatureWire> for PoiFeature {
	type Error = anyhow::Error;

	fn try_from(wire: FeatureWire) -> Result<Self> {
		if wire.object_type != "Feature" {
			bail!("type must be 'Feature', but is '{}'", wire.object_type);
		}
		let geometry = wire.geometry.ok_or_else(|| anyhow!("feature is missing 'geometry'"))?;
		let properties = wire.properties.unwrap_or_default();

		let id = match (&wire.id, &properties.id) {
			(Some(JsonValue::Null) | None, Some(JsonValue::Null) | None) => None,
			(Some(id), _) if !id.is_null() => Some(parse_id(id)?),
			(_, Some(id)) => Some(parse_id(id)?),
			_ => None,
		};

		let geom_type = match properties.geom_type {
			Some(tag) => tag,
			None => {
				let tag = GeomKind::of_value(&geometry.value).tag();
				log::debug!("feature {id:?} has no geom_type, using '{tag}'");
				tag
			}
		};

		Ok(PoiFeature {
			id,
			geometry,
			properties: PoiProperties {
				name: properties.name,
				poi_type: properties.poi_type,
				address: properties.address,
				geom_type,
				attributes: properties.properties.unwrap_or_default(),
			},
		})
	}
}

impl From<PoiFeature> for FeatureWire {
	fn from(feature: PoiFeature) -> Self {
		let id = feature.id.map(JsonValue::from);
		let p = feature.properties;
		FeatureWire {
			object_type: String::from("Feature"),
			id: id.clone(),
			geometry: Some(feature.geometry),
			properties: Some(PropertiesWire {
				id,
				name: p.name,
				poi_type: p.poi_type,
				address: p.address,
				geom_type: Some(p.geom_type),
				properties: if p.attributes.is_empty() { None } else { Some(p.attributes) },
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geojson::Value;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn parse_backend_feature() {
		let feature = PoiFeature::from_json_str(
			r#"{
				"type": "Feature",
				"geometry": {"type": "Point", "coordinates": [13.4, 52.5]},
				"properties": {
					"id": 7,
					"name": "Cafe",
					"poi_type": "food",
					"address": null,
					"geom_type": "ST_Point",
					"properties": {"seats": 12}
				}
			}"#,
		)
		.unwrap();

		assert_eq!(feature.id, Some(7));
		assert_eq!(feature.geometry.value, Value::Point(vec![13.4, 52.5]));
		assert_eq!(feature.properties.name.as_deref(), Some("Cafe"));
		assert_eq!(feature.properties.poi_type.as_deref(), Some("food"));
		assert_eq!(feature.properties.address, None);
		assert_eq!(feature.properties.geom_type, "ST_Point");
		assert_eq!(feature.properties.attributes.get("seats"), Some(&json!(12)));
		assert_eq!(GeomKind::parse_tag(&feature.properties.geom_type), GeomKind::Point);
	}

	#[test]
	fn parse_minimal_feature() {
		let feature = PoiFeature::from_json_str(
			r#"{"type":"Feature","id":"3","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}}"#,
		)
		.unwrap();
		assert_eq!(feature.id, Some(3));
		assert_eq!(feature.properties.geom_type, "ST_LineString");
		assert_eq!(feature.properties.name, None);
		assert!(feature.properties.attributes.is_empty());
	}

	#[test]
	fn feature_id_wins_over_property_id() {
		let feature = PoiFeature::from_json_str(
			r#"{"type":"Feature","id":5,"geometry":{"type":"Point","coordinates":[0,0]},"properties":{"id":6}}"#,
		)
		.unwrap();
		assert_eq!(feature.id, Some(5));
	}

	#[test]
	fn parse_errors() {
		let no_geometry = PoiFeature::from_json_str(r#"{"type":"Feature","properties":{}}"#);
		assert!(no_geometry.unwrap_err().to_string().contains("missing 'geometry'"));

		let wrong_type =
			PoiFeature::from_json_str(r#"{"type":"Point","geometry":{"type":"Point","coordinates":[0,0]}}"#);
		assert!(wrong_type.is_err());

		let bad_id = PoiFeature::from_json_str(
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{"id":"abc"}}"#,
		);
		assert!(bad_id.is_err());
	}

	#[test]
	fn serialize_writes_id_twice() {
		let mut feature = PoiFeature::new(Geometry::new(Value::Point(vec![1.0, 2.0])));
		feature.id = Some(9);
		feature.properties.name = Some("Here".into());

		let json: JsonValue = serde_json::from_str(&feature.to_json_string().unwrap()).unwrap();
		assert_eq!(
			json,
			json!({
				"type": "Feature",
				"id": 9,
				"geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
				"properties": {
					"id": 9,
					"name": "Here",
					"poi_type": null,
					"address": null,
					"geom_type": "ST_Point",
					"properties": null
				}
			})
		);

		let parsed: PoiFeature = serde_json::from_value(json).unwrap();
		assert_eq!(parsed, feature);
	}
}
