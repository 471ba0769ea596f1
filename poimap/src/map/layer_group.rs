use super::{Shape, ShapeHandle};
use poimap_core::GeoBBox;

/// A named, clearable bucket of shapes.
#[derive(Clone, Debug)]
pub struct LayerGroup {
	name: &'static str,
	shapes: Vec<Shape>,
}

impl LayerGroup {
	pub fn new(name: &'static str) -> LayerGroup {
		LayerGroup {
			name,
			shapes: Vec::new(),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn add(&mut self, shape: Shape) {
		log::trace!("add shape {} to layer group '{}'", shape.handle, self.name);
		self.shapes.push(shape);
	}

	pub fn remove(&mut self, handle: ShapeHandle) -> Option<Shape> {
		let index = self.shapes.iter().position(|s| s.handle == handle)?;
		Some(self.shapes.remove(index))
	}

	pub fn get(&self, handle: ShapeHandle) -> Option<&Shape> {
		self.shapes.iter().find(|s| s.handle == handle)
	}

	pub fn contains(&self, handle: ShapeHandle) -> bool {
		self.get(handle).is_some()
	}

	pub fn clear(&mut self) {
		self.shapes.clear();
	}

	pub fn len(&self) -> usize {
		self.shapes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.shapes.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
		self.shapes.iter()
	}

	pub fn handles(&self) -> Vec<ShapeHandle> {
		self.shapes.iter().map(|s| s.handle).collect()
	}

	/// Bounding box of all shapes, `None` if the group is empty.
	pub fn bounds(&self) -> Option<GeoBBox> {
		self.shapes.iter().filter_map(Shape::bounds).reduce(|a, b| a.extended(&b))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geojson::{Geometry, Value};
	use poimap_core::ShapeStyle;

	fn point(handle: u64, x: f64, y: f64) -> Shape {
		Shape::new(
			ShapeHandle(handle),
			Geometry::new(Value::Point(vec![x, y])),
			ShapeStyle::Marker,
		)
	}

	#[test]
	fn add_remove_clear() {
		let mut group = LayerGroup::new("points");
		assert!(group.is_empty());
		group.add(point(1, 0.0, 0.0));
		group.add(point(2, 1.0, 1.0));
		assert_eq!(group.handles(), vec![ShapeHandle(1), ShapeHandle(2)]);

		assert_eq!(group.remove(ShapeHandle(1)).unwrap().handle, ShapeHandle(1));
		assert!(group.remove(ShapeHandle(1)).is_none());
		assert!(!group.contains(ShapeHandle(1)));
		assert!(group.contains(ShapeHandle(2)));

		group.clear();
		assert_eq!(group.len(), 0);
		assert_eq!(group.name(), "points");
	}

	#[test]
	fn bounds() {
		let mut group = LayerGroup::new("points");
		assert_eq!(group.bounds(), None);
		group.add(point(1, -5.0, 2.0));
		group.add(point(2, 3.0, -1.0));
		assert_eq!(group.bounds().unwrap().as_tuple(), (-5.0, -1.0, 3.0, 2.0));
	}
}
