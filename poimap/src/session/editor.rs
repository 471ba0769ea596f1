//! The map session that loads POIs, renders them and turns drawing-tool events
//! into backend requests.
//!
//! Every action takes `&mut self`, so one session never runs two actions at once.
//! Failures end the action: they are logged, shown to the user and reported in
//! the returned outcome. Nothing is retried.

use super::{DrawEvent, DrawOptions, DrawTool, DrawnShape, EditorMode, ModalClick, PoiFormInput, PoiView};
use crate::{
	config::MapConfig,
	map::{MapCanvas, Shape, ShapeHandle},
};
use anyhow::Result;
use geojson::Geometry;
use poimap_client::PoiBackend;
use poimap_core::{
	ColorCycle, LayerClass, MarkerStyle, NewPoi, PathStyle, PoiAttributes, PoiFeature, ShapeStyle, render_popup,
};
use std::sync::Arc;

pub const STATUS_EMPTY: &str = "No POIs found in database";
pub const STATUS_LOAD_ERROR: &str = "Error loading POIs";
pub const ALERT_NO_SHAPE: &str = "Please draw a shape on the map first";
pub const ALERT_SAVED: &str = "POI saved successfully!";

/// Result of fetching and rendering the POI collection.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
	Empty,
	Loaded(usize),
	Failed(String),
}

/// Result of submitting the POI form.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
	/// Created; `id` is what the backend reported.
	Saved { id: Option<u64> },
	NoPendingShape,
	InvalidProperties(String),
	Failed(String),
}

/// What happened to the shapes removed in one go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteSummary {
	pub deleted: Vec<u64>,
	pub failed: Vec<u64>,
	/// Shapes that were never saved and went away without a request.
	pub unsaved: usize,
}

impl DeleteSummary {
	pub fn requests(&self) -> usize {
		self.deleted.len() + self.failed.len()
	}
}

/// What became of one drawing-tool event.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOutcome {
	/// The shape is pending and the form is open.
	Created(ShapeHandle),
	Rejected(String),
	Removed(DeleteSummary),
}

/// A drawn shape waiting for its metadata.
#[derive(Clone, Debug, PartialEq)]
struct PendingShape {
	handle: ShapeHandle,
	geometry: Geometry,
}

#[derive(Debug)]
pub struct PoiEditor {
	backend: Arc<dyn PoiBackend>,
	tool: Box<dyn DrawTool>,
	view: Box<dyn PoiView>,
	canvas: MapCanvas,
	colors: ColorCycle,
	mode: EditorMode,
	fit_padding: u32,
	pending: Option<PendingShape>,
}

impl PoiEditor {
	pub fn new(
		config: &MapConfig,
		backend: Arc<dyn PoiBackend>,
		tool: Box<dyn DrawTool>,
		view: Box<dyn PoiView>,
	) -> PoiEditor {
		PoiEditor {
			backend,
			tool,
			view,
			canvas: MapCanvas::new(config),
			colors: ColorCycle::new(),
			mode: config.mode,
			fit_padding: config.fit_padding,
			pending: None,
		}
	}

	pub fn canvas(&self) -> &MapCanvas {
		&self.canvas
	}

	pub fn mode(&self) -> EditorMode {
		self.mode
	}

	/// Handle of the shape waiting for its metadata.
	pub fn pending(&self) -> Option<ShapeHandle> {
		self.pending.as_ref().map(|p| p.handle)
	}

	/// Attaches the drawing tool (in editor mode) and loads the POIs.
	pub async fn start(&mut self) -> LoadOutcome {
		if self.mode.is_editable() {
			self.tool.begin_edit(&DrawOptions::default());
		}
		self.load_pois().await
	}

	/// Fetches all POIs once and renders them into their layer groups.
	pub async fn load_pois(&mut self) -> LoadOutcome {
		let collection = match self.backend.list_pois().await {
			Ok(collection) => collection,
			Err(err) => {
				log::error!("loading POIs from {} failed: {err:#}", self.backend.get_name());
				self.view.set_status(STATUS_LOAD_ERROR);
				return LoadOutcome::Failed(err.to_string());
			}
		};

		if collection.is_empty() {
			self.view.set_status(STATUS_EMPTY);
			return LoadOutcome::Empty;
		}

		let count = collection.len();
		for feature in collection.features {
			self.render_feature(feature);
		}
		log::debug!("rendered {count} POIs");
		self.view.set_status(&format!("Total POIs: {count}"));

		self.canvas.fit_to_content(self.fit_padding);
		LoadOutcome::Loaded(count)
	}

	fn render_feature(&mut self, feature: PoiFeature) {
		let tag = &feature.properties.geom_type;
		let class = match self.mode {
			EditorMode::Editor => LayerClass::classify(tag),
			EditorMode::Viewer => LayerClass::classify_simple(tag),
		};
		let style = match class {
			LayerClass::Point => ShapeStyle::CircleMarker(MarkerStyle::POI),
			LayerClass::Line => ShapeStyle::Path(PathStyle::POI_LINE),
			LayerClass::Polygon => ShapeStyle::Path(PathStyle::poi_polygon(self.colors.next_color())),
		};

		let shape = Shape::new(self.canvas.new_handle(), feature.geometry.clone(), style)
			.with_popup(render_popup(&feature))
			.with_feature(feature);

		if self.mode.is_editable() {
			self.canvas.add_to_overlay(shape.clone());
		}
		self.canvas.add_to_group(class, shape);
	}

	/// Empties every layer group, restarts the color cycle and forgets the pending shape.
	pub fn clear_layers(&mut self) {
		self.canvas.clear_layers();
		self.colors.reset();
		self.pending = None;
	}

	pub async fn reload(&mut self) -> LoadOutcome {
		self.clear_layers();
		self.load_pois().await
	}

	/// Handles everything the drawing tool reported since the last call.
	pub async fn process_draw_events(&mut self) -> Vec<DrawOutcome> {
		let mut outcomes = Vec::new();
		for event in self.tool.poll_events() {
			let outcome = match event {
				DrawEvent::Created(shape) => match self.on_shape_created(&shape) {
					Ok(handle) => DrawOutcome::Created(handle),
					Err(err) => {
						log::warn!("ignoring drawn {}: {err:#}", shape.kind_name());
						DrawOutcome::Rejected(err.to_string())
					}
				},
				DrawEvent::Removed(handles) => DrawOutcome::Removed(self.on_shapes_removed(&handles).await),
			};
			outcomes.push(outcome);
		}
		outcomes
	}

	/// Puts a freshly drawn shape on the overlay and asks for its metadata.
	pub fn on_shape_created(&mut self, shape: &DrawnShape) -> Result<ShapeHandle> {
		let geometry = shape.to_geometry()?;

		if let Some(previous) = self.pending.take() {
			log::debug!("discarding unsaved shape {}", previous.handle);
			self.canvas.remove_shape(previous.handle);
		}

		let handle = self.canvas.new_handle();
		self
			.canvas
			.add_to_overlay(Shape::new(handle, geometry.clone(), shape.draw_style()));
		self.pending = Some(PendingShape { handle, geometry });
		self.view.open_form();
		Ok(handle)
	}

	pub fn on_modal_click(&mut self, click: ModalClick) {
		if click == ModalClick::Backdrop {
			self.cancel_pending();
		}
	}

	/// Closes the form and removes the unsaved shape. Returns whether there was one.
	pub fn cancel_pending(&mut self) -> bool {
		self.view.close_form();
		match self.pending.take() {
			Some(pending) => {
				self.canvas.remove_shape(pending.handle);
				true
			}
			None => false,
		}
	}

	/// Saves the pending shape with the metadata from the form.
	pub async fn submit_form(&mut self) -> SubmitOutcome {
		let Some(pending) = &self.pending else {
			self.view.alert(ALERT_NO_SHAPE);
			return SubmitOutcome::NoPendingShape;
		};

		let input = self.view.read_form();
		let properties = if input.properties.trim().is_empty() {
			None
		} else {
			match PoiAttributes::parse_text(&input.properties) {
				Ok(attributes) => Some(attributes),
				Err(err) => {
					let message = format!("{err:#}");
					self.view.alert(&format!("Invalid JSON in properties: {message}"));
					return SubmitOutcome::InvalidProperties(message);
				}
			}
		};

		let poi = NewPoi {
			name: PoiFormInput::field(&input.name),
			poi_type: PoiFormInput::field(&input.poi_type),
			address: PoiFormInput::field(&input.address),
			geometry: pending.geometry.clone(),
			properties,
		};

		match self.backend.create_poi(&poi).await {
			Ok(id) => {
				log::info!("saved POI {}", id.map_or_else(|| "without id".to_string(), |id| id.to_string()));
				self.view.close_form();
				self.view.reset_form();
				self.reload().await;
				self.view.alert(ALERT_SAVED);
				SubmitOutcome::Saved { id }
			}
			Err(err) => {
				log::error!("saving POI failed: {err:#}");
				let message = err.to_string();
				self.view.alert(&format!("Error saving POI: {message}"));
				SubmitOutcome::Failed(message)
			}
		}
	}

	/// Deletes the POIs behind shapes removed from the overlay and reloads once if any request was sent.
	pub async fn on_shapes_removed(&mut self, handles: &[ShapeHandle]) -> DeleteSummary {
		let mut summary = DeleteSummary::default();

		for handle in handles {
			if !self.canvas.drawn().contains(*handle) {
				log::warn!("shape {handle} is not on the editable overlay");
				continue;
			}
			let Some(shape) = self.canvas.remove_shape(*handle) else {
				continue;
			};
			if self.pending() == Some(*handle) {
				self.pending = None;
				self.view.close_form();
			}

			let Some(id) = shape.poi_id() else {
				summary.unsaved += 1;
				continue;
			};
			match self.backend.delete_poi(id).await {
				Ok(()) => {
					log::info!("deleted POI {id}");
					summary.deleted.push(id);
				}
				Err(err) => {
					log::error!("deleting POI {id} failed: {err:#}");
					self.view.alert(&format!("Error deleting POI {id}: {err}"));
					summary.failed.push(id);
				}
			}
		}

		if summary.requests() > 0 {
			self.reload().await;
		}
		summary
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		map::clamp_to_mercator,
		session::{RecordingView, ScriptedDrawTool},
	};
	use geojson::Value;
	use poimap_client::{BackendRequest, PoiStoreMemory};
	use poimap_core::{GeoBBox, POLYGON_PALETTE};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	struct Harness {
		store: Arc<PoiStoreMemory>,
		tool: ScriptedDrawTool,
		view: RecordingView,
		editor: PoiEditor,
	}

	fn harness(mode: EditorMode, pois: Vec<NewPoi>) -> Harness {
		let store = Arc::new(PoiStoreMemory::recording());
		for poi in pois {
			store.insert(poi);
		}
		let tool = ScriptedDrawTool::new();
		let view = RecordingView::new();
		let config = MapConfig {
			mode,
			..MapConfig::default()
		};
		let editor = PoiEditor::new(&config, store.clone(), Box::new(tool.clone()), Box::new(view.clone()));
		Harness {
			store,
			tool,
			view,
			editor,
		}
	}

	fn poi(name: &str, value: Value) -> NewPoi {
		NewPoi {
			name: Some(name.to_string()),
			..NewPoi::new(Geometry::new(value))
		}
	}

	fn square(x: f64, y: f64) -> Value {
		Value::Polygon(vec![vec![
			vec![x, y],
			vec![x + 1.0, y],
			vec![x + 1.0, y + 1.0],
			vec![x, y + 1.0],
			vec![x, y],
		]])
	}

	fn mixed() -> Vec<NewPoi> {
		vec![
			poi("cafe", Value::Point(vec![13.40, 52.52])),
			poi("river", Value::LineString(vec![vec![13.30, 52.50], vec![13.50, 52.45]])),
			poi("park", square(13.35, 52.51)),
			poi(
				"bridges",
				Value::MultiLineString(vec![vec![vec![13.41, 52.50], vec![13.42, 52.51]]]),
			),
		]
	}

	fn polygon_colors(editor: &PoiEditor) -> Vec<&'static str> {
		editor
			.canvas()
			.group(LayerClass::Polygon)
			.iter()
			.filter_map(|s| s.style.color())
			.collect()
	}

	#[tokio::test]
	async fn empty_collection() {
		let mut h = harness(EditorMode::Editor, vec![]);
		let before = h.editor.canvas().view().clone();

		assert_eq!(h.editor.start().await, LoadOutcome::Empty);
		assert_eq!(h.view.status().as_deref(), Some(STATUS_EMPTY));
		assert_eq!(h.editor.canvas().rendered_count(), 0);
		assert!(h.editor.canvas().drawn().is_empty());
		assert_eq!(h.editor.canvas().view(), &before);
	}

	#[tokio::test]
	async fn features_land_in_their_layer_group() {
		let mut h = harness(EditorMode::Editor, mixed());
		assert_eq!(h.editor.start().await, LoadOutcome::Loaded(4));
		assert_eq!(h.view.status().as_deref(), Some("Total POIs: 4"));

		let canvas = h.editor.canvas();
		let names = |class| -> Vec<String> {
			canvas
				.group(class)
				.iter()
				.filter_map(|s| s.feature.as_ref()?.properties.name.clone())
				.collect()
		};
		assert_eq!(names(LayerClass::Point), vec!["cafe"]);
		assert_eq!(names(LayerClass::Line), vec!["river", "bridges"]);
		assert_eq!(names(LayerClass::Polygon), vec!["park"]);
		assert_eq!(canvas.drawn().len(), 4);

		let visible = canvas.view().bounds();
		for feature in h.store.features() {
			let bbox = clamp_to_mercator(&GeoBBox::from_geometry(&feature.geometry.value).unwrap());
			assert!(visible.contains(&bbox), "{visible:?} must contain {bbox:?}");
		}
	}

	#[tokio::test]
	async fn class_is_decided_by_tag_only() {
		let h = harness(EditorMode::Editor, vec![]);
		let mut feature = PoiFeature::new(Geometry::new(Value::Point(vec![1.0, 1.0])));
		feature.id = Some(7);
		feature.properties.geom_type = "ST_LineString".to_string();
		h.store.insert_features(vec![feature]);

		let mut editor = h.editor;
		editor.start().await;
		assert_eq!(editor.canvas().group(LayerClass::Line).len(), 1);
		assert_eq!(editor.canvas().group(LayerClass::Point).len(), 0);
	}

	#[tokio::test]
	async fn shapes_carry_popup_and_feature() {
		let mut h = harness(EditorMode::Editor, mixed());
		h.editor.start().await;
		let shape = h.editor.canvas().group(LayerClass::Point).iter().next().unwrap();
		assert!(shape.popup.as_deref().unwrap().contains("<h3>cafe</h3>"));
		assert_eq!(shape.poi_id(), Some(1));
		assert_eq!(shape.style, ShapeStyle::CircleMarker(MarkerStyle::POI));
	}

	#[tokio::test]
	async fn viewer_mode_splits_points_from_the_rest() {
		let mut h = harness(EditorMode::Viewer, mixed());
		assert_eq!(h.editor.start().await, LoadOutcome::Loaded(4));
		assert!(!h.tool.is_editing());

		let canvas = h.editor.canvas();
		assert_eq!(canvas.group(LayerClass::Point).len(), 1);
		assert_eq!(canvas.group(LayerClass::Line).len(), 0);
		assert_eq!(canvas.group(LayerClass::Polygon).len(), 3);
		assert!(canvas.drawn().is_empty());
	}

	#[tokio::test]
	async fn polygon_colors_cycle_and_restart_on_reload() {
		let pois = (0..12).map(|i| poi("area", square(f64::from(i), 0.0))).collect();
		let mut h = harness(EditorMode::Editor, pois);
		h.editor.start().await;

		let expected: Vec<_> = (0..12).map(|i| POLYGON_PALETTE[i % 10]).collect();
		assert_eq!(polygon_colors(&h.editor), expected);

		h.editor.reload().await;
		assert_eq!(polygon_colors(&h.editor), expected);
	}

	#[tokio::test]
	async fn load_failure_sets_status_and_keeps_layers() {
		let mut h = harness(EditorMode::Editor, mixed());
		h.editor.start().await;
		let view_before = h.editor.canvas().view().clone();

		h.store.fail_with("connection refused");
		assert_eq!(
			h.editor.load_pois().await,
			LoadOutcome::Failed("connection refused".to_string())
		);
		assert_eq!(h.view.status().as_deref(), Some(STATUS_LOAD_ERROR));
		assert_eq!(h.editor.canvas().rendered_count(), 4);
		assert_eq!(h.editor.canvas().view(), &view_before);
		assert!(h.view.alerts().is_empty());
	}

	#[tokio::test]
	async fn drawing_opens_the_form() {
		let mut h = harness(EditorMode::Editor, vec![]);
		h.editor.start().await;

		h.tool.draw(DrawnShape::Marker([5.0, 5.0]));
		let outcomes = h.editor.process_draw_events().await;

		let handle = h.editor.pending().unwrap();
		assert_eq!(outcomes, vec![DrawOutcome::Created(handle)]);
		assert!(h.view.is_form_open());
		assert_eq!(h.editor.canvas().drawn().get(handle).unwrap().style, ShapeStyle::Marker);
		assert_eq!(h.editor.canvas().rendered_count(), 0);
	}

	#[tokio::test]
	async fn new_drawing_replaces_pending_shape() {
		let mut h = harness(EditorMode::Editor, vec![]);
		h.editor.start().await;

		let first = h.editor.on_shape_created(&DrawnShape::Marker([1.0, 1.0])).unwrap();
		let second = h
			.editor
			.on_shape_created(&DrawnShape::Polyline(vec![[0.0, 0.0], [1.0, 1.0]]))
			.unwrap();
		assert_eq!(h.editor.pending(), Some(second));
		assert!(!h.editor.canvas().drawn().contains(first));
		assert_eq!(h.editor.canvas().drawn().len(), 1);
	}

	#[tokio::test]
	async fn backdrop_click_cancels() {
		let mut h = harness(EditorMode::Editor, vec![]);
		h.editor.start().await;
		h.editor.on_shape_created(&DrawnShape::Marker([1.0, 1.0])).unwrap();

		h.editor.on_modal_click(ModalClick::Content);
		assert!(h.view.is_form_open());
		assert!(h.editor.pending().is_some());

		h.editor.on_modal_click(ModalClick::Backdrop);
		assert!(!h.view.is_form_open());
		assert!(h.editor.pending().is_none());
		assert!(h.editor.canvas().drawn().is_empty());
		assert!(!h.editor.cancel_pending());
	}

	#[tokio::test]
	async fn submit_without_shape() {
		let mut h = harness(EditorMode::Editor, vec![]);
		h.editor.start().await;
		h.store.clear_requests();

		assert_eq!(h.editor.submit_form().await, SubmitOutcome::NoPendingShape);
		assert_eq!(h.view.alerts(), vec![ALERT_NO_SHAPE]);
		assert!(h.store.requests().is_empty());
	}

	#[tokio::test]
	async fn submit_with_invalid_json() {
		let mut h = harness(EditorMode::Editor, vec![]);
		h.editor.start().await;
		let handle = h.editor.on_shape_created(&DrawnShape::Marker([1.0, 1.0])).unwrap();
		h.store.clear_requests();

		h.view.fill_form(PoiFormInput {
			name: "Kiosk".into(),
			properties: "{invalid".into(),
			..Default::default()
		});
		let outcome = h.editor.submit_form().await;

		assert!(matches!(outcome, SubmitOutcome::InvalidProperties(_)));
		assert!(h.view.last_alert().unwrap().starts_with("Invalid JSON in properties: "));
		assert!(h.store.requests().is_empty());
		assert_eq!(h.editor.pending(), Some(handle));
		assert!(h.editor.canvas().drawn().contains(handle));
		assert!(h.view.is_form_open());
		assert_eq!(h.view.form().name, "Kiosk");
	}

	#[tokio::test]
	async fn submit_saves_and_reloads_once() {
		let mut h = harness(EditorMode::Editor, mixed());
		h.editor.start().await;
		h.editor
			.on_shape_created(&DrawnShape::Rectangle {
				south_west: [13.0, 52.0],
				north_east: [13.1, 52.1],
			})
			.unwrap();
		h.store.clear_requests();

		h.view.fill_form(PoiFormInput {
			name: " Market ".into(),
			poi_type: "market".into(),
			address: String::new(),
			properties: r#"{"open": "daily"}"#.into(),
		});
		assert_eq!(h.editor.submit_form().await, SubmitOutcome::Saved { id: Some(5) });

		let requests = h.store.requests();
		assert_eq!(requests.len(), 2);
		let BackendRequest::Create(created) = &requests[0] else {
			panic!("expected a create request, got {:?}", requests[0]);
		};
		assert_eq!(requests[1], BackendRequest::List);
		assert_eq!(created.name.as_deref(), Some("Market"));
		assert_eq!(created.poi_type.as_deref(), Some("market"));
		assert_eq!(created.address, None);
		assert_eq!(created.attributes().get("open"), Some(&json!("daily")));
		assert!(matches!(created.geometry.value, Value::Polygon(_)));

		assert_eq!(h.view.last_alert().as_deref(), Some(ALERT_SAVED));
		assert!(!h.view.is_form_open());
		assert_eq!(h.view.form(), PoiFormInput::default());
		assert!(h.editor.pending().is_none());
		assert_eq!(h.editor.canvas().rendered_count(), 5);
		assert_eq!(h.editor.canvas().drawn().len(), 5);
		assert_eq!(h.view.status().as_deref(), Some("Total POIs: 5"));
	}

	#[tokio::test]
	async fn blank_fields_are_sent_as_null() {
		let mut h = harness(EditorMode::Editor, vec![]);
		h.editor.start().await;
		h.editor.on_shape_created(&DrawnShape::Marker([1.0, 1.0])).unwrap();
		h.store.clear_requests();

		h.editor.submit_form().await;
		let requests = h.store.requests();
		let BackendRequest::Create(created) = &requests[0] else {
			panic!("expected a create request");
		};
		assert_eq!(
			serde_json::to_value(created).unwrap(),
			json!({
				"name": null,
				"poi_type": null,
				"address": null,
				"geometry": {"type": "Point", "coordinates": [1.0, 1.0]},
				"properties": null
			})
		);
	}

	#[tokio::test]
	async fn failed_submit_keeps_the_shape() {
		let mut h = harness(EditorMode::Editor, vec![]);
		h.editor.start().await;
		let handle = h.editor.on_shape_created(&DrawnShape::Marker([1.0, 1.0])).unwrap();
		h.store.clear_requests();
		h.store.fail_with("HTTP request failed with status 500 Internal Server Error");

		let outcome = h.editor.submit_form().await;
		assert!(matches!(outcome, SubmitOutcome::Failed(_)));
		assert_eq!(
			h.view.last_alert().as_deref(),
			Some("Error saving POI: HTTP request failed with status 500 Internal Server Error")
		);
		assert_eq!(h.store.requests().len(), 1);
		assert_eq!(h.editor.pending(), Some(handle));
		assert!(h.editor.canvas().drawn().contains(handle));
		assert!(h.view.is_form_open());

		h.store.recover();
		assert_eq!(h.editor.submit_form().await, SubmitOutcome::Saved { id: Some(1) });
	}

	#[tokio::test]
	async fn deleting_a_saved_shape_sends_one_request() {
		let mut h = harness(EditorMode::Editor, mixed());
		h.editor.start().await;
		h.store.clear_requests();

		let park = h.editor.canvas().group(LayerClass::Polygon).handles()[0];
		h.tool.remove(vec![park]);
		let outcomes = h.editor.process_draw_events().await;
		let [DrawOutcome::Removed(summary)] = outcomes.as_slice() else {
			panic!("expected one removal, got {outcomes:?}");
		};
		assert_eq!(summary.deleted, vec![3]);

		assert_eq!(h.store.requests(), vec![BackendRequest::Delete(3), BackendRequest::List]);
		assert_eq!(h.store.len(), 3);
		assert_eq!(h.editor.canvas().group(LayerClass::Polygon).len(), 0);
		assert_eq!(h.view.status().as_deref(), Some("Total POIs: 3"));
	}

	#[tokio::test]
	async fn deleting_an_unsaved_shape_sends_nothing() {
		let mut h = harness(EditorMode::Editor, mixed());
		h.editor.start().await;
		let drawn = h.editor.on_shape_created(&DrawnShape::Marker([1.0, 1.0])).unwrap();
		h.store.clear_requests();

		let summary = h.editor.on_shapes_removed(&[drawn]).await;
		assert_eq!(
			summary,
			DeleteSummary {
				unsaved: 1,
				..Default::default()
			}
		);
		assert!(h.store.requests().is_empty());
		assert!(h.editor.pending().is_none());
		assert!(!h.view.is_form_open());
	}

	#[tokio::test]
	async fn several_deletes_reload_once() {
		let mut h = harness(EditorMode::Editor, mixed());
		h.editor.start().await;
		h.store.clear_requests();

		let handles = h.editor.canvas().group(LayerClass::Line).handles();
		let summary = h.editor.on_shapes_removed(&handles).await;
		assert_eq!(summary.deleted, vec![2, 4]);
		assert_eq!(
			h.store.requests(),
			vec![BackendRequest::Delete(2), BackendRequest::Delete(4), BackendRequest::List]
		);
	}

	#[tokio::test]
	async fn failed_delete_is_alerted() {
		let mut h = harness(EditorMode::Editor, mixed());
		h.editor.start().await;
		let cafe = h.editor.canvas().group(LayerClass::Point).handles()[0];
		h.store.fail_with("gone");

		let summary = h.editor.on_shapes_removed(&[cafe]).await;
		assert_eq!(summary.failed, vec![1]);
		assert_eq!(h.view.last_alert().as_deref(), Some("Error deleting POI 1: gone"));
		assert_eq!(h.view.status().as_deref(), Some(STATUS_LOAD_ERROR));
	}
}
