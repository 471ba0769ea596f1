use super::{LayerGroup, MapView, Shape, ShapeHandle, TileLayer};
use crate::config::MapConfig;
use poimap_core::{GeoBBox, LayerClass};

/// The map with its base tiles, the three POI layer groups and the editable overlay.
///
/// A shape rendered from a POI lives in the group of its [`LayerClass`] and, when the
/// map is editable, also in the overlay (`drawn`), under the same handle. Shapes the
/// user draws live in the overlay only.
#[derive(Clone, Debug)]
pub struct MapCanvas {
	view: MapView,
	base_layer: TileLayer,
	points: LayerGroup,
	lines: LayerGroup,
	polygons: LayerGroup,
	drawn: LayerGroup,
	next_handle: u64,
}

impl MapCanvas {
	pub fn new(config: &MapConfig) -> MapCanvas {
		MapCanvas {
			view: MapView::from_config(config),
			base_layer: TileLayer::from_config(&config.tiles),
			points: LayerGroup::new("points"),
			lines: LayerGroup::new("lines"),
			polygons: LayerGroup::new("polygons"),
			drawn: LayerGroup::new("drawn"),
			next_handle: 1,
		}
	}

	pub fn view(&self) -> &MapView {
		&self.view
	}

	pub fn base_layer(&self) -> &TileLayer {
		&self.base_layer
	}

	/// Hands out a handle no other shape on this canvas has had.
	pub fn new_handle(&mut self) -> ShapeHandle {
		let handle = ShapeHandle(self.next_handle);
		self.next_handle += 1;
		handle
	}

	pub fn group(&self, class: LayerClass) -> &LayerGroup {
		match class {
			LayerClass::Point => &self.points,
			LayerClass::Line => &self.lines,
			LayerClass::Polygon => &self.polygons,
		}
	}

	fn group_mut(&mut self, class: LayerClass) -> &mut LayerGroup {
		match class {
			LayerClass::Point => &mut self.points,
			LayerClass::Line => &mut self.lines,
			LayerClass::Polygon => &mut self.polygons,
		}
	}

	/// The editable overlay.
	pub fn drawn(&self) -> &LayerGroup {
		&self.drawn
	}

	pub fn add_to_group(&mut self, class: LayerClass, shape: Shape) {
		self.group_mut(class).add(shape);
	}

	pub fn add_to_overlay(&mut self, shape: Shape) {
		self.drawn.add(shape);
	}

	/// Removes a shape from every group it is in.
	pub fn remove_shape(&mut self, handle: ShapeHandle) -> Option<Shape> {
		let in_overlay = self.drawn.remove(handle);
		let in_group = [LayerClass::Point, LayerClass::Line, LayerClass::Polygon]
			.into_iter()
			.find_map(|class| self.group_mut(class).remove(handle));
		in_overlay.or(in_group)
	}

	/// Empties all layer groups and the overlay.
	pub fn clear_layers(&mut self) {
		self.points.clear();
		self.lines.clear();
		self.polygons.clear();
		self.drawn.clear();
	}

	/// Number of shapes in the three POI layer groups.
	pub fn rendered_count(&self) -> usize {
		self.points.len() + self.lines.len() + self.polygons.len()
	}

	/// Bounding box across the point, line and polygon groups.
	pub fn rendered_bounds(&self) -> Option<GeoBBox> {
		[&self.points, &self.lines, &self.polygons]
			.into_iter()
			.filter_map(LayerGroup::bounds)
			.reduce(|a, b| a.extended(&b))
	}

	/// Fits the view to everything rendered. Leaves the view alone if nothing is.
	pub fn fit_to_content(&mut self, padding: u32) -> bool {
		match self.rendered_bounds() {
			Some(bbox) => {
				self.view.fit_bounds(&bbox, padding);
				true
			}
			None => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geojson::{Geometry, Value};
	use poimap_core::ShapeStyle;

	fn shape(canvas: &mut MapCanvas, value: Value) -> Shape {
		Shape::new(canvas.new_handle(), Geometry::new(value), ShapeStyle::Marker)
	}

	#[test]
	fn handles_are_unique() {
		let mut canvas = MapCanvas::new(&MapConfig::default());
		let a = canvas.new_handle();
		canvas.clear_layers();
		let b = canvas.new_handle();
		assert_ne!(a, b);
	}

	#[test]
	fn remove_from_all_groups() {
		let mut canvas = MapCanvas::new(&MapConfig::default());
		let s = shape(&mut canvas, Value::Point(vec![1.0, 2.0]));
		let handle = s.handle;
		canvas.add_to_group(LayerClass::Point, s.clone());
		canvas.add_to_overlay(s);

		assert!(canvas.drawn().contains(handle));
		assert!(canvas.remove_shape(handle).is_some());
		assert!(canvas.group(LayerClass::Point).is_empty());
		assert!(canvas.drawn().is_empty());
		assert!(canvas.remove_shape(handle).is_none());
	}

	#[test]
	fn bounds_ignore_overlay_only_shapes() {
		let mut canvas = MapCanvas::new(&MapConfig::default());
		let point = shape(&mut canvas, Value::Point(vec![1.0, 2.0]));
		let line = shape(&mut canvas, Value::LineString(vec![vec![3.0, 4.0], vec![5.0, 6.0]]));
		let pending = shape(&mut canvas, Value::Point(vec![50.0, 50.0]));
		canvas.add_to_group(LayerClass::Point, point);
		canvas.add_to_group(LayerClass::Line, line);
		canvas.add_to_overlay(pending);

		assert_eq!(canvas.rendered_count(), 2);
		assert_eq!(canvas.rendered_bounds().unwrap().as_tuple(), (1.0, 2.0, 5.0, 6.0));
	}

	#[test]
	fn fit_without_content_keeps_view() {
		let mut canvas = MapCanvas::new(&MapConfig::default());
		let before = canvas.view().clone();
		assert!(!canvas.fit_to_content(50));
		assert_eq!(canvas.view(), &before);
	}
}
