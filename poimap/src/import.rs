//! Bulk import of GeoJSON features as POIs.
//!
//! Every feature is posted through a [`PoiBackend`]. The source fields for name,
//! type and address are configurable; all other non-null properties end up in
//! the open `properties` mapping of the POI. Positions must be WGS84 longitude
//! and latitude, there is no reprojection.

use anyhow::{Context, Result, bail};
use geojson::{Feature, GeoJson};
use poimap_client::PoiBackend;
use poimap_core::{GeoBBox, NewPoi, PoiAttributes, UNNAMED_POI};
use serde_json::Value as JsonValue;
use std::{fmt::Display, path::Path};

#[derive(Clone, Debug, PartialEq)]
pub struct ImportOptions {
	pub name_field: String,
	pub type_field: String,
	pub address_field: String,
	/// Skip features without usable geometry, and keep going after failed requests.
	pub skip_invalid: bool,
}

impl Default for ImportOptions {
	fn default() -> Self {
		ImportOptions {
			name_field: String::from("name"),
			type_field: String::from("type"),
			address_field: String::from("address"),
			skip_invalid: true,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
	pub success: usize,
	pub failed: usize,
	pub skipped: usize,
}

impl Display for ImportStats {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"imported: {}, failed: {}, skipped: {}",
			self.success, self.failed, self.skipped
		)
	}
}

/// Imports a `.geojson` or `.json` file.
pub async fn import_file(backend: &dyn PoiBackend, path: &Path, options: &ImportOptions) -> Result<ImportStats> {
	let extension = path
		.extension()
		.and_then(|e| e.to_str())
		.map(str::to_lowercase)
		.unwrap_or_default();
	match extension.as_str() {
		"geojson" | "json" => (),
		other => bail!("unsupported file format '.{other}' of '{}', expected .geojson or .json", path.display()),
	}

	let text = std::fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))?;
	log::info!("reading GeoJSON file '{}'", path.display());
	import_geojson_str(backend, &text, options)
		.await
		.with_context(|| format!("importing '{}'", path.display()))
}

/// Imports a GeoJSON Feature or FeatureCollection.
pub async fn import_geojson_str(backend: &dyn PoiBackend, text: &str, options: &ImportOptions) -> Result<ImportStats> {
	let features = read_features(text)?;
	let mut stats = ImportStats::default();
	if features.is_empty() {
		log::warn!("no features found");
		return Ok(stats);
	}
	log::info!("importing {} features into {}", features.len(), backend.get_name());

	for (index, feature) in features.iter().enumerate() {
		let Some(poi) = to_new_poi(feature, options) else {
			if options.skip_invalid {
				log::warn!("skipping feature {index} without geometry");
				stats.skipped += 1;
				continue;
			}
			bail!("invalid geometry in feature {index}");
		};

		match backend.create_poi(&poi).await {
			Ok(_) => stats.success += 1,
			Err(err) => {
				stats.failed += 1;
				log::error!("importing feature {index} failed: {err:#}");
				if !options.skip_invalid {
					return Err(err.context(format!("importing feature {index}")));
				}
			}
		}
	}

	log::info!("import finished, {stats}");
	Ok(stats)
}

fn read_features(text: &str) -> Result<Vec<Feature>> {
	let geojson = text.parse::<GeoJson>().context("parsing GeoJSON")?;
	match geojson {
		GeoJson::FeatureCollection(collection) => {
			check_crs(collection.foreign_members.as_ref().and_then(|m| m.get("crs")))?;
			Ok(collection.features)
		}
		GeoJson::Feature(feature) => Ok(vec![feature]),
		GeoJson::Geometry(_) => bail!("expected a Feature or FeatureCollection, found a bare geometry"),
	}
}

/// Accepts a missing `crs` member or one naming WGS84.
fn check_crs(crs: Option<&JsonValue>) -> Result<()> {
	let Some(name) = crs.and_then(|c| c.pointer("/properties/name")).and_then(JsonValue::as_str) else {
		return Ok(());
	};
	let wgs84 = ["EPSG:4326", "EPSG::4326", "CRS84"];
	if wgs84.iter().any(|w| name.ends_with(w)) {
		Ok(())
	} else {
		bail!("unsupported coordinate reference system '{name}', positions must be WGS84")
	}
}

/// Maps a feature to a creation request. `None` when it has no usable geometry.
pub fn to_new_poi(feature: &Feature, options: &ImportOptions) -> Option<NewPoi> {
	let geometry = feature.geometry.clone()?;
	GeoBBox::from_geometry(&geometry.value)?;

	let empty = serde_json::Map::new();
	let source = feature.properties.as_ref().unwrap_or(&empty);
	let text_field = |key: &str| source.get(key).and_then(json_text);

	let mut attributes = PoiAttributes::new();
	for (key, value) in source {
		if value.is_null() || [&options.name_field, &options.type_field, &options.address_field].contains(&key) {
			continue;
		}
		attributes.insert(key.clone(), value.clone());
	}

	Some(NewPoi {
		name: Some(text_field(&options.name_field).unwrap_or_else(|| UNNAMED_POI.to_string())),
		poi_type: text_field(&options.type_field),
		address: text_field(&options.address_field),
		geometry,
		properties: if attributes.is_empty() { None } else { Some(attributes) },
	})
}

fn json_text(value: &JsonValue) -> Option<String> {
	match value {
		JsonValue::Null => None,
		JsonValue::String(s) => Some(s.clone()),
		other => Some(other.to_string()),
	}
}
