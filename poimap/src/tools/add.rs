use super::{CliSession, ConnectArgs};
use anyhow::{Result, bail, ensure};
use poimap::{
	config::Config,
	session::{DrawOptions, DrawnShape, EditorMode, LoadOutcome, PoiFormInput, STATUS_LOAD_ERROR, SubmitOutcome},
};
use poimap_client::PoiBackend;
use std::sync::Arc;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Shape to draw, as "kind:lng,lat;lng,lat;..."
	/// kinds: marker, polyline, polygon, rectangle (two corners)
	///    e.g. "marker:13.4,52.5" or "polygon:0,0;1,0;1,1"
	#[arg(required = true, value_name = "SHAPE", verbatim_doc_comment)]
	pub shape: DrawnShape,

	#[command(flatten)]
	pub connect: ConnectArgs,

	#[arg(short, long)]
	pub name: Option<String>,

	#[arg(short = 't', long = "type")]
	pub poi_type: Option<String>,

	#[arg(short, long)]
	pub address: Option<String>,

	/// Additional properties as a JSON object.
	#[arg(short, long, value_name = "JSON")]
	pub properties: Option<String>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.connect.load_config()?;
	let backend = ConnectArgs::connect(&config)?;
	println!("{}", execute(arguments, &config, backend).await?);
	Ok(())
}

/// Draws the shape, fills in the form and submits it.
pub async fn execute(arguments: &Subcommand, config: &Config, backend: Arc<dyn PoiBackend>) -> Result<String> {
	DrawOptions::default().check(&arguments.shape)?;

	let mut session = CliSession::new(&config.map, EditorMode::Editor, backend);
	if let LoadOutcome::Failed(err) = session.editor.start().await {
		bail!("{STATUS_LOAD_ERROR}: {err}");
	}

	session.tool.draw(arguments.shape.clone());
	session.editor.process_draw_events().await;
	ensure!(session.editor.pending().is_some(), "the {} was not drawn", arguments.shape.kind_name());

	session.view.fill_form(PoiFormInput {
		name: arguments.name.clone().unwrap_or_default(),
		poi_type: arguments.poi_type.clone().unwrap_or_default(),
		address: arguments.address.clone().unwrap_or_default(),
		properties: arguments.properties.clone().unwrap_or_default(),
	});

	match session.editor.submit_form().await {
		SubmitOutcome::Saved { id: Some(id) } => Ok(format!("{} (id {id})", session.alert_or("saved"))),
		SubmitOutcome::Saved { id: None } => Ok(session.alert_or("saved")),
		SubmitOutcome::NoPendingShape => bail!("{}", session.alert_or("nothing to save")),
		SubmitOutcome::InvalidProperties(message) | SubmitOutcome::Failed(message) => {
			bail!("{}", session.alert_or(&message))
		}
	}
}
