use super::{CliSession, ConnectArgs};
use anyhow::{Result, bail};
use poimap::{
	config::Config,
	session::{DrawOutcome, EditorMode, LoadOutcome, STATUS_LOAD_ERROR},
};
use poimap_client::PoiBackend;
use std::sync::Arc;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// ids of the POIs to delete
	#[arg(num_args = 1.., required = true)]
	pub ids: Vec<u64>,

	#[command(flatten)]
	pub connect: ConnectArgs,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.connect.load_config()?;
	let backend = ConnectArgs::connect(&config)?;
	println!("{}", execute(arguments, &config, backend).await?);
	Ok(())
}

/// Removes the shapes of the given POIs from the editable overlay in one go.
pub async fn execute(arguments: &Subcommand, config: &Config, backend: Arc<dyn PoiBackend>) -> Result<String> {
	let mut session = CliSession::new(&config.map, EditorMode::Editor, backend);
	if let LoadOutcome::Failed(err) = session.editor.start().await {
		bail!("{STATUS_LOAD_ERROR}: {err}");
	}

	let mut handles = Vec::new();
	for id in &arguments.ids {
		match session.editor.canvas().drawn().iter().find(|s| s.poi_id() == Some(*id)) {
			Some(shape) => handles.push(shape.handle),
			None => bail!("POI {id} not found"),
		}
	}

	session.tool.remove(handles);
	let mut deleted = Vec::new();
	let mut failed = Vec::new();
	for outcome in session.editor.process_draw_events().await {
		if let DrawOutcome::Removed(summary) = outcome {
			deleted.extend(summary.deleted);
			failed.extend(summary.failed);
		}
	}

	if !failed.is_empty() {
		bail!("{}", session.alert_or(&format!("failed to delete POIs {failed:?}")));
	}
	Ok(format!("deleted {} POIs: {deleted:?}", deleted.len()))
}
