//! The editing session: one [`PoiEditor`] owns the canvas, the color cycle, the pending
//! drawing and its collaborators (backend, drawing tool, view).

mod draw;
mod editor;
mod view;

pub use draw::*;
pub use editor::*;
pub use view::*;

use serde::Deserialize;

/// Whether the map can be edited.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
	/// Drawing and deleting enabled; lines get their own layer group.
	#[default]
	Editor,
	/// Read only; features are split into points and everything else.
	Viewer,
}

impl EditorMode {
	pub fn is_editable(&self) -> bool {
		matches!(self, EditorMode::Editor)
	}
}
