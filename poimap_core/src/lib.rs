//! Data model and pure rendering logic for the POI map.
//!
//! - [`types`]: the GeoJSON POI feature model exchanged with the backend, geometry-kind
//!   classification and geographic bounding boxes.
//! - [`render`]: popup markup, the polygon color cycle and the fixed shape styles.
//!
//! Nothing in this crate performs I/O.

pub mod render;
pub mod types;

pub use render::*;
pub use types::*;
