use super::ConnectArgs;
use anyhow::Result;
use poimap_client::PoiBackend;
use poimap_core::render_popup_text;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// id of the POI
	#[arg(required = true)]
	pub id: u64,

	#[command(flatten)]
	pub connect: ConnectArgs,

	/// Print the GeoJSON feature instead of the popup text.
	#[arg(long)]
	pub json: bool,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.connect.load_config()?;
	let backend = ConnectArgs::connect(&config)?;
	println!("{}", execute(arguments, backend.as_ref()).await?);
	Ok(())
}

pub async fn execute(arguments: &Subcommand, backend: &dyn PoiBackend) -> Result<String> {
	let feature = backend.get_poi(arguments.id).await?;
	if arguments.json {
		feature.to_json_string()
	} else {
		Ok(render_popup_text(&feature))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geojson::{Geometry, Value};
	use poimap_client::PoiStoreMemory;
	use poimap_core::{NewPoi, PoiFeature};

	fn arguments(id: u64, json: bool) -> Subcommand {
		Subcommand {
			id,
			connect: ConnectArgs::default(),
			json,
		}
	}

	#[tokio::test]
	async fn show() -> Result<()> {
		let store = PoiStoreMemory::new();
		store.insert(NewPoi {
			name: Some("Harbour".into()),
			poi_type: Some("port".into()),
			..NewPoi::new(Geometry::new(Value::Point(vec![9.9, 53.5])))
		});

		let text = execute(&arguments(1, false), &store).await?;
		assert_eq!(text, "Harbour\nType: port\nID: 1\nGeometry: ST_Point");

		let json = execute(&arguments(1, true), &store).await?;
		assert_eq!(PoiFeature::from_json_str(&json)?.id, Some(1));

		let err = execute(&arguments(2, false), &store).await.unwrap_err();
		assert_eq!(err.to_string(), "POI 2 not found");
		Ok(())
	}
}
