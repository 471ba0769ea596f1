pub mod add;
pub mod delete;
pub mod import;
pub mod serve;
pub mod show;
pub mod view;

use anyhow::Result;
use poimap::{
	config::{Config, MapConfig},
	session::{EditorMode, PoiEditor, RecordingView, ScriptedDrawTool},
};
use poimap_client::{PoiBackend, PoiClientHttp};
use std::{path::PathBuf, sync::Arc};

/// Where to find the POI backend.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ConnectArgs {
	/// Path to a configuration file (YAML format).
	/// Command line arguments override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	pub config: Option<PathBuf>,

	/// Base URL of the POI API. Default: http://localhost:5000/
	#[arg(short = 'u', long, value_name = "URL", display_order = 0)]
	pub url: Option<String>,
}

impl ConnectArgs {
	pub fn load_config(&self) -> Result<Config> {
		let mut config = match &self.config {
			Some(path) => Config::from_path(path)?,
			None => Config::default(),
		};
		config.api.override_optional_base_url(self.url.as_deref());
		Ok(config)
	}

	pub fn connect(config: &Config) -> Result<Arc<dyn PoiBackend>> {
		log::debug!("connecting to {}", config.api.base_url);
		Ok(Arc::new(PoiClientHttp::new(&config.api.base_url, config.api.timeout())?))
	}
}

/// An editor driven from the command line: actions are queued on the tool, form
/// input and alerts go through the recording view.
pub struct CliSession {
	pub editor: PoiEditor,
	pub tool: ScriptedDrawTool,
	pub view: RecordingView,
}

impl CliSession {
	pub fn new(map: &MapConfig, mode: EditorMode, backend: Arc<dyn PoiBackend>) -> CliSession {
		let map = MapConfig { mode, ..map.clone() };
		let tool = ScriptedDrawTool::new();
		let view = RecordingView::new();
		let editor = PoiEditor::new(&map, backend, Box::new(tool.clone()), Box::new(view.clone()));
		CliSession { editor, tool, view }
	}

	/// The last alert, or `fallback` when there was none.
	pub fn alert_or(&self, fallback: &str) -> String {
		self.view.last_alert().unwrap_or_else(|| fallback.to_string())
	}
}
