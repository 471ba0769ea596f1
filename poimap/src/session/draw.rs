//! The interactive drawing tool, seen through the events it emits.

use crate::map::ShapeHandle;
use anyhow::{Context, Error, Result, bail, ensure};
use geojson::{Geometry, Value};
use parking_lot::Mutex;
use poimap_core::{PathStyle, ShapeStyle};
use std::{collections::VecDeque, fmt::Debug, str::FromStr, sync::Arc};

/// A shape finished by the user, in `[lng, lat]` positions.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawnShape {
	Marker([f64; 2]),
	Polyline(Vec<[f64; 2]>),
	Polygon(Vec<[f64; 2]>),
	Rectangle { south_west: [f64; 2], north_east: [f64; 2] },
}

impl DrawnShape {
	pub fn kind_name(&self) -> &'static str {
		match self {
			DrawnShape::Marker(_) => "marker",
			DrawnShape::Polyline(_) => "polyline",
			DrawnShape::Polygon(_) => "polygon",
			DrawnShape::Rectangle { .. } => "rectangle",
		}
	}

	/// The shape as GeoJSON. Polygon rings are closed.
	pub fn to_geometry(&self) -> Result<Geometry> {
		let value = match self {
			DrawnShape::Marker(p) => Value::Point(p.to_vec()),
			DrawnShape::Polyline(points) => {
				ensure!(points.len() >= 2, "a polyline needs at least 2 points, got {}", points.len());
				Value::LineString(points.iter().map(|p| p.to_vec()).collect())
			}
			DrawnShape::Polygon(points) => Value::Polygon(vec![closed_ring(points)?]),
			DrawnShape::Rectangle { south_west, north_east } => {
				let [w, s] = *south_west;
				let [e, n] = *north_east;
				ensure!(w < e && s < n, "rectangle corners {south_west:?} and {north_east:?} do not span an area");
				Value::Polygon(vec![vec![
					vec![w, s],
					vec![w, n],
					vec![e, n],
					vec![e, s],
					vec![w, s],
				]])
			}
		};
		Ok(Geometry::new(value))
	}

	/// Style of the shape while it waits for its metadata.
	pub fn draw_style(&self) -> ShapeStyle {
		match self {
			DrawnShape::Marker(_) => ShapeStyle::Marker,
			DrawnShape::Polyline(_) => ShapeStyle::Path(PathStyle::DRAW_POLYLINE),
			DrawnShape::Polygon(_) => ShapeStyle::Path(PathStyle::DRAW_POLYGON),
			DrawnShape::Rectangle { .. } => ShapeStyle::Path(PathStyle::DRAW_RECTANGLE),
		}
	}

	/// Whether two non-neighbouring edges of a polygon cross.
	pub fn self_intersects(&self) -> bool {
		let DrawnShape::Polygon(points) = self else {
			return false;
		};
		let Ok(ring) = closed_ring(points) else {
			return false;
		};
		let edges: Vec<_> = ring
			.windows(2)
			.map(|w| ([w[0][0], w[0][1]], [w[1][0], w[1][1]]))
			.collect();
		let n = edges.len();
		for i in 0..n {
			for j in (i + 2)..n {
				// first and last edge share a vertex
				if i == 0 && j == n - 1 {
					continue;
				}
				if segments_cross(edges[i], edges[j]) {
					return true;
				}
			}
		}
		false
	}
}

fn closed_ring(points: &[[f64; 2]]) -> Result<Vec<Vec<f64>>> {
	let mut ring: Vec<Vec<f64>> = points.iter().map(|p| p.to_vec()).collect();
	if ring.len() > 1 && ring.first() == ring.last() {
		ring.pop();
	}
	ensure!(ring.len() >= 3, "a polygon needs at least 3 points, got {}", ring.len());
	ring.push(ring[0].clone());
	Ok(ring)
}

fn orientation(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
	(b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

fn segments_cross((a, b): ([f64; 2], [f64; 2]), (c, d): ([f64; 2], [f64; 2])) -> bool {
	let d1 = orientation(c, d, a);
	let d2 = orientation(c, d, b);
	let d3 = orientation(a, b, c);
	let d4 = orientation(a, b, d);
	(d1 * d2 < 0.0) && (d3 * d4 < 0.0)
}

/// Parses `kind:lng,lat;lng,lat;...`, e.g. `marker:13.4,52.5` or `rectangle:0,0;1,1`.
impl FromStr for DrawnShape {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self> {
		let (kind, coords) = text
			.split_once(':')
			.with_context(|| format!("expected 'kind:lng,lat;...' but got '{text}'"))?;
		let points = coords
			.split(';')
			.filter(|p| !p.trim().is_empty())
			.map(parse_position)
			.collect::<Result<Vec<_>>>()?;

		let shape = match kind.trim().to_lowercase().as_str() {
			"marker" | "point" => {
				ensure!(points.len() == 1, "a marker needs exactly 1 position, got {}", points.len());
				DrawnShape::Marker(points[0])
			}
			"polyline" | "line" => DrawnShape::Polyline(points),
			"polygon" => DrawnShape::Polygon(points),
			"rectangle" => {
				ensure!(points.len() == 2, "a rectangle needs 2 corners, got {}", points.len());
				DrawnShape::Rectangle {
					south_west: [points[0][0].min(points[1][0]), points[0][1].min(points[1][1])],
					north_east: [points[0][0].max(points[1][0]), points[0][1].max(points[1][1])],
				}
			}
			other => bail!("unknown shape kind '{other}', expected marker, polyline, polygon or rectangle"),
		};
		shape.to_geometry()?;
		Ok(shape)
	}
}

fn parse_position(text: &str) -> Result<[f64; 2]> {
	let parts = text
		.split(',')
		.map(|v| v.trim().parse::<f64>().with_context(|| format!("invalid number '{v}' in '{text}'")))
		.collect::<Result<Vec<_>>>()?;
	ensure!(parts.len() == 2, "expected 'lng,lat' but got '{text}'");
	let [lng, lat] = [parts[0], parts[1]];
	ensure!((-180.0..=180.0).contains(&lng), "longitude {lng} out of range");
	ensure!((-90.0..=90.0).contains(&lat), "latitude {lat} out of range");
	Ok([lng, lat])
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolygonOptions {
	pub allow_intersection: bool,
	/// Shown while the user draws an edge that would cross another one.
	pub draw_error: PathStyle,
	pub draw_error_message: &'static str,
	pub shape: PathStyle,
}

/// What the drawing tool lets the user do.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
	pub marker: bool,
	pub polyline: Option<PathStyle>,
	pub polygon: Option<PolygonOptions>,
	pub rectangle: Option<PathStyle>,
	pub circle: bool,
	pub circle_marker: bool,
	/// Removing shapes of the overlay.
	pub remove: bool,
	/// Moving and reshaping shapes of the overlay.
	pub edit: bool,
}

impl Default for DrawOptions {
	fn default() -> Self {
		DrawOptions {
			marker: true,
			polyline: Some(PathStyle::DRAW_POLYLINE),
			polygon: Some(PolygonOptions {
				allow_intersection: false,
				draw_error: PathStyle::DRAW_ERROR,
				draw_error_message: "Polygon edges must not cross",
				shape: PathStyle::DRAW_POLYGON,
			}),
			rectangle: Some(PathStyle::DRAW_RECTANGLE),
			circle: false,
			circle_marker: false,
			remove: true,
			edit: false,
		}
	}
}

impl DrawOptions {
	/// Checks that the tool would let the user finish `shape`.
	pub fn check(&self, shape: &DrawnShape) -> Result<()> {
		match shape {
			DrawnShape::Marker(_) => ensure!(self.marker, "drawing markers is disabled"),
			DrawnShape::Polyline(_) => ensure!(self.polyline.is_some(), "drawing polylines is disabled"),
			DrawnShape::Polygon(_) => match &self.polygon {
				None => bail!("drawing polygons is disabled"),
				Some(polygon) => {
					if !polygon.allow_intersection && shape.self_intersects() {
						bail!("{}", polygon.draw_error_message);
					}
				}
			},
			DrawnShape::Rectangle { .. } => ensure!(self.rectangle.is_some(), "drawing rectangles is disabled"),
		}
		Ok(())
	}
}

/// Something the user did with the drawing tool.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawEvent {
	Created(DrawnShape),
	/// Shapes deleted from the overlay in one go.
	Removed(Vec<ShapeHandle>),
}

/// An interactive drawing tool attached to the overlay of the map.
pub trait DrawTool: Debug + Send {
	/// Attaches the tool to the overlay and enables the given controls.
	fn begin_edit(&mut self, options: &DrawOptions);

	/// Takes the events that happened since the last call.
	fn poll_events(&mut self) -> Vec<DrawEvent>;
}

#[derive(Debug, Default)]
struct ToolState {
	options: Option<DrawOptions>,
	queue: VecDeque<DrawEvent>,
}

/// A [`DrawTool`] that replays queued user actions.
///
/// Clones share the queue. Like the real tool it does nothing before
/// [`begin_edit`](DrawTool::begin_edit) and refuses shapes the options forbid.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDrawTool {
	state: Arc<Mutex<ToolState>>,
}

impl ScriptedDrawTool {
	pub fn new() -> ScriptedDrawTool {
		ScriptedDrawTool::default()
	}

	pub fn draw(&self, shape: DrawnShape) {
		self.state.lock().queue.push_back(DrawEvent::Created(shape));
	}

	pub fn remove(&self, handles: Vec<ShapeHandle>) {
		self.state.lock().queue.push_back(DrawEvent::Removed(handles));
	}

	pub fn options(&self) -> Option<DrawOptions> {
		self.state.lock().options.clone()
	}

	pub fn is_editing(&self) -> bool {
		self.state.lock().options.is_some()
	}
}

impl DrawTool for ScriptedDrawTool {
	fn begin_edit(&mut self, options: &DrawOptions) {
		self.state.lock().options = Some(options.clone());
	}

	fn poll_events(&mut self) -> Vec<DrawEvent> {
		let mut state = self.state.lock();
		let Some(options) = state.options.clone() else {
			return Vec::new();
		};
		state
			.queue
			.drain(..)
			.filter(|event| match event {
				DrawEvent::Created(shape) => match options.check(shape) {
					Ok(()) => true,
					Err(err) => {
						log::warn!("{} refused: {err}", shape.kind_name());
						false
					}
				},
				DrawEvent::Removed(_) => options.remove,
			})
			.collect()
	}
}
