use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Free-form metadata attached to a POI (`properties.properties` on the wire).
///
/// Keys are kept sorted so that rendering is stable.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoiAttributes {
	attributes: BTreeMap<String, JsonValue>,
}

impl PoiAttributes {
	pub fn new() -> PoiAttributes {
		PoiAttributes {
			attributes: BTreeMap::new(),
		}
	}

	/// Parses user-entered text. Blank text yields an empty mapping.
	/// Anything else must be a JSON object.
	pub fn parse_text(text: &str) -> Result<PoiAttributes> {
		if text.trim().is_empty() {
			return Ok(PoiAttributes::new());
		}
		match serde_json::from_str::<JsonValue>(text)? {
			JsonValue::Object(map) => Ok(PoiAttributes::from(map)),
			other => bail!("expected a JSON object, but got '{other}'"),
		}
	}

	pub fn insert(&mut self, key: String, value: JsonValue) {
		self.attributes.insert(key, value);
	}
	pub fn remove(&mut self, key: &str) {
		self.attributes.remove(key);
	}
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.attributes.get(key)
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, JsonValue> {
		self.attributes.iter()
	}
	pub fn len(&self) -> usize {
		self.attributes.len()
	}
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// Pretty-printed JSON object with two-space indentation.
	pub fn to_pretty_json(&self) -> String {
		serde_json::to_string_pretty(&self.attributes).unwrap_or_else(|_| String::from("{}"))
	}
}

impl From<Map<String, JsonValue>> for PoiAttributes {
	fn from(value: Map<String, JsonValue>) -> Self {
		PoiAttributes {
			attributes: value.into_iter().collect(),
		}
	}
}

impl From<Vec<(&str, JsonValue)>> for PoiAttributes {
	fn from(value: Vec<(&str, JsonValue)>) -> Self {
		PoiAttributes {
			attributes: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl FromIterator<(String, JsonValue)> for PoiAttributes {
	fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
		PoiAttributes {
			attributes: BTreeMap::from_iter(iter),
		}
	}
}

impl IntoIterator for PoiAttributes {
	type Item = (String, JsonValue);
	type IntoIter = btree_map::IntoIter<String, JsonValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.attributes.into_iter()
	}
}

impl Debug for PoiAttributes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.attributes.iter()).finish()
	}
}
