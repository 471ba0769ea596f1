use super::{PoiAttributes, PoiFeature, PoiProperties};
use geojson::Geometry;
use serde::{Deserialize, Serialize};

/// Request body of `POST /api/pois`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPoi {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub poi_type: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
	pub geometry: Geometry,
	#[serde(default)]
	pub properties: Option<PoiAttributes>,
}

impl NewPoi {
	pub fn new(geometry: Geometry) -> NewPoi {
		NewPoi {
			name: None,
			poi_type: None,
			address: None,
			geometry,
			properties: None,
		}
	}

	/// The record the backend would store, once it has assigned `id`.
	pub fn into_feature(self, id: u64) -> PoiFeature {
		let mut feature = PoiFeature::new(self.geometry);
		feature.id = Some(id);
		feature.properties = PoiProperties {
			name: self.name,
			poi_type: self.poi_type,
			address: self.address,
			geom_type: feature.properties.geom_type,
			attributes: self.properties.unwrap_or_default(),
		};
		feature
	}

	pub fn attributes(&self) -> PoiAttributes {
		self.properties.clone().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geojson::Value;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn serialize_body() {
		let mut poi = NewPoi::new(Geometry::new(Value::Point(vec![2.0, 3.0])));
		poi.name = Some("Well".into());
		poi.properties = Some(PoiAttributes::from(vec![("depth", json!(12))]));

		assert_eq!(
			serde_json::to_value(&poi).unwrap(),
			json!({
				"name": "Well",
				"poi_type": null,
				"address": null,
				"geometry": {"type": "Point", "coordinates": [2.0, 3.0]},
				"properties": {"depth": 12}
			})
		);
	}

	#[test]
	fn into_feature() {
		let poi = NewPoi::new(Geometry::new(Value::Polygon(vec![vec![
			vec![0.0, 0.0],
			vec![1.0, 0.0],
			vec![1.0, 1.0],
			vec![0.0, 0.0],
		]])));
		let feature = poi.into_feature(42);
		assert_eq!(feature.id, Some(42));
		assert_eq!(feature.properties.geom_type, "ST_Polygon");
		assert!(feature.properties.attributes.is_empty());
	}
}
