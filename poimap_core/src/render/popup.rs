//! Popup content of a rendered POI.
//!
//! Optional fields that are absent (or blank) are left out instead of being
//! rendered as empty lines; a missing name falls back to [`UNNAMED_POI`].

use crate::PoiFeature;

pub const UNNAMED_POI: &str = "Unnamed POI";

/// Renders the popup markup for a feature.
///
/// ```
/// use geojson::{Geometry, Value};
/// use poimap_core::{PoiFeature, render_popup};
///
/// let feature = PoiFeature::new(Geometry::new(Value::Point(vec![0.0, 0.0])));
/// let html = render_popup(&feature);
/// assert!(html.contains("<h3>Unnamed POI</h3>"));
/// assert!(!html.contains("Address"));
/// ```
pub fn render_popup(feature: &PoiFeature) -> String {
	let p = &feature.properties;
	let mut html = String::from("<div class=\"poi-popup\">\n");

	html += &format!("<h3>{}</h3>\n", escape_html(display_name(feature)));
	if let Some(poi_type) = non_blank(p.poi_type.as_deref()) {
		html += &format!("<p><strong>Type:</strong> {}</p>\n", escape_html(poi_type));
	}
	if let Some(address) = non_blank(p.address.as_deref()) {
		html += &format!("<p><strong>Address:</strong> {}</p>\n", escape_html(address));
	}
	if let Some(id) = feature.id {
		html += &format!("<p><strong>ID:</strong> {id}</p>\n");
	}
	html += &format!("<p><strong>Geometry:</strong> {}</p>\n", escape_html(&p.geom_type));
	if !p.attributes.is_empty() {
		html += &format!(
			"<p><strong>Properties:</strong></p>\n<pre>{}</pre>\n",
			escape_html(&p.attributes.to_pretty_json())
		);
	}

	html.push_str("</div>");
	html
}

/// Same content as [`render_popup`], as plain text lines.
pub fn render_popup_text(feature: &PoiFeature) -> String {
	let p = &feature.properties;
	let mut lines = vec![display_name(feature).to_string()];
	if let Some(poi_type) = non_blank(p.poi_type.as_deref()) {
		lines.push(format!("Type: {poi_type}"));
	}
	if let Some(address) = non_blank(p.address.as_deref()) {
		lines.push(format!("Address: {address}"));
	}
	if let Some(id) = feature.id {
		lines.push(format!("ID: {id}"));
	}
	lines.push(format!("Geometry: {}", p.geom_type));
	if !p.attributes.is_empty() {
		lines.push(format!("Properties: {}", p.attributes.to_pretty_json()));
	}
	lines.join("\n")
}

pub fn display_name(feature: &PoiFeature) -> &str {
	non_blank(feature.properties.name.as_deref()).unwrap_or(UNNAMED_POI)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.trim().is_empty())
}

pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			c => escaped.push(c),
		}
	}
	escaped
}
