use super::PoiFeature;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// An ordered set of POIs, exchanged as a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CollectionWire", into = "CollectionWire")]
pub struct PoiCollection {
	pub features: Vec<PoiFeature>,
}

impl PoiCollection {
	pub fn from(features: Vec<PoiFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}
}

#[derive(Serialize, Deserialize)]
struct CollectionWire {
	#[serde(rename = "type")]
	object_type: String,
	#[serde(default)]
	features: Vec<PoiFeature>,
}

impl TryFrom<CollectionWire> for PoiCollection {
	type Error = anyhow::Error;

	fn try_from(wire: CollectionWire) -> Result<Self> {
		if wire.object_type != "FeatureCollection" {
			bail!("type must be 'FeatureCollection', but is '{}'", wire.object_type);
		}
		Ok(PoiCollection {
			features: wire.features,
		})
	}
}

impl From<PoiCollection> for CollectionWire {
	fn from(collection: PoiCollection) -> Self {
		CollectionWire {
			object_type: String::from("FeatureCollection"),
			features: collection.features,
		}
	}
}
