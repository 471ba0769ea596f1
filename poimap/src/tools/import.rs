use super::ConnectArgs;
use anyhow::Result;
use poimap::import::{ImportOptions, ImportStats, import_file};
use poimap_client::PoiBackend;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file (*.geojson or *.json) with a Feature or FeatureCollection
	#[arg(required = true)]
	pub file: PathBuf,

	#[command(flatten)]
	pub connect: ConnectArgs,

	/// Property holding the POI name.
	#[arg(long, default_value = "name")]
	pub name_field: String,

	/// Property holding the POI type.
	#[arg(long, default_value = "type")]
	pub type_field: String,

	/// Property holding the address.
	#[arg(long, default_value = "address")]
	pub address_field: String,

	/// Fail on features without geometry instead of skipping them.
	#[arg(long)]
	pub no_skip_invalid: bool,
}

impl Subcommand {
	fn options(&self) -> ImportOptions {
		ImportOptions {
			name_field: self.name_field.clone(),
			type_field: self.type_field.clone(),
			address_field: self.address_field.clone(),
			skip_invalid: !self.no_skip_invalid,
		}
	}
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.connect.load_config()?;
	let backend = ConnectArgs::connect(&config)?;
	let stats = execute(arguments, backend.as_ref()).await?;
	println!("{stats}");
	Ok(())
}

pub async fn execute(arguments: &Subcommand, backend: &dyn PoiBackend) -> Result<ImportStats> {
	eprintln!("import {:?} into {}", arguments.file, backend.get_name());
	import_file(backend, &arguments.file, &arguments.options()).await
}
