//! The visible map: view state, base tiles and layer groups.

mod canvas;
mod layer_group;
mod shape;
mod tile_layer;
mod view;

pub use canvas::*;
pub use layer_group::*;
pub use shape::*;
pub use tile_layer::*;
pub use view::*;
