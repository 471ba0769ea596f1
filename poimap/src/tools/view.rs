use super::{CliSession, ConnectArgs};
use anyhow::{Result, bail};
use poimap::{
	config::Config,
	map::project,
	session::{EditorMode, LoadOutcome, STATUS_LOAD_ERROR},
};
use poimap_client::PoiBackend;
use poimap_core::{LayerClass, render_popup_text};
use std::{fmt::Write, sync::Arc};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	pub connect: ConnectArgs,

	/// Split layers like the editor does (lines separate from polygons).
	#[arg(long)]
	pub editor: bool,

	/// Print the popup of every POI.
	#[arg(short, long)]
	pub popups: bool,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.connect.load_config()?;
	let backend = ConnectArgs::connect(&config)?;
	print!("{}", execute(arguments, &config, backend).await?);
	Ok(())
}

/// Loads the map once and describes what would be shown.
pub async fn execute(arguments: &Subcommand, config: &Config, backend: Arc<dyn PoiBackend>) -> Result<String> {
	let mode = if arguments.editor {
		EditorMode::Editor
	} else {
		EditorMode::Viewer
	};
	let mut session = CliSession::new(&config.map, mode, backend);
	if let LoadOutcome::Failed(err) = session.editor.start().await {
		bail!("{STATUS_LOAD_ERROR}: {err}");
	}

	let canvas = session.editor.canvas();
	let mut out = String::new();
	writeln!(out, "{}", session.view.status().unwrap_or_default())?;
	for class in [LayerClass::Point, LayerClass::Line, LayerClass::Polygon] {
		let group = canvas.group(class);
		writeln!(out, "{:<10}{}", group.name(), group.len())?;
	}

	let view = canvas.view();
	let (lng, lat) = view.center();
	writeln!(out, "center    {lng:.5}, {lat:.5}")?;
	writeln!(out, "zoom      {}", view.zoom())?;
	let (x, y) = project(lng, lat);
	let tiles = 2f64.powi(i32::from(view.zoom()));
	let tile_index = |v: f64| (v * tiles).clamp(0.0, tiles - 1.0) as u32;
	let tile = canvas.base_layer().tile_url(view.zoom(), tile_index(x), tile_index(y));
	writeln!(out, "tile      {tile}")?;

	if arguments.popups {
		for class in [LayerClass::Point, LayerClass::Line, LayerClass::Polygon] {
			for feature in canvas.group(class).iter().filter_map(|s| s.feature.as_ref()) {
				writeln!(out, "\n{}", render_popup_text(feature))?;
			}
		}
	}
	Ok(out)
}
