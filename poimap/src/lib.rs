//! # POI Map
//!
//! Viewer and editor for points of interest stored behind a GeoJSON REST API
//! (`GET /api/pois`, `POST /api/pois`, `DELETE /api/pois/{id}`).
//!
//! ## Modules
//! - [`config`]: YAML configuration of the backend, the map and the development server
//! - [`map`]: map view, base tiles and the layer groups shapes are rendered into
//! - [`session`]: the editing session, i.e. loading, drawing, the POI form and deleting
//! - [`import`]: bulk import of GeoJSON files
//! - [`server`]: an in-memory implementation of the API, for development and tests
//!
//! ## Usage Example
//!
//! ```rust
//! use poimap::{
//!     config::MapConfig,
//!     session::{LoadOutcome, PoiEditor, RecordingView, ScriptedDrawTool},
//! };
//! use poimap_client::PoiStoreMemory;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = Arc::new(PoiStoreMemory::new());
//!     let view = RecordingView::new();
//!     let mut editor = PoiEditor::new(
//!         &MapConfig::default(),
//!         backend,
//!         Box::new(ScriptedDrawTool::new()),
//!         Box::new(view.clone()),
//!     );
//!
//!     assert_eq!(editor.start().await, LoadOutcome::Empty);
//!     assert_eq!(view.status().as_deref(), Some("No POIs found in database"));
//! }
//! ```

pub mod config;
pub mod import;
pub mod map;
pub mod server;
pub mod session;
