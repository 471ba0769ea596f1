use anyhow::Result;
use poimap::{
	config::Config,
	import::{ImportOptions, import_file},
	server::PoiServer,
};
use poimap_client::PoiStoreMemory;
use std::{net::IpAddr, path::PathBuf, sync::Arc};
use tokio::time::{Duration, sleep};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Path to a configuration file (YAML format) to configure the server.
	/// Command line arguments will override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	pub config: Option<PathBuf>,

	/// Serve via socket ip. Default: 127.0.0.1
	#[arg(short = 'i', long, display_order = 0)]
	pub ip: Option<IpAddr>,

	/// Serve via port. Default: 5000
	#[arg(short, long, display_order = 0)]
	pub port: Option<u16>,

	/// Import a GeoJSON file into the in-memory store before serving.
	#[arg(long, value_name = "FILE", display_order = 1)]
	pub seed: Option<PathBuf>,

	/// Shutdown server automatically after x milliseconds.
	#[arg(long, display_order = 4)]
	pub auto_shutdown: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = if let Some(config_path) = &arguments.config {
		Config::from_path(config_path)?
	} else {
		Config::default()
	};

	let mut server_config = config.server;
	server_config.override_optional_ip(arguments.ip);
	server_config.override_optional_port(arguments.port);

	let store = Arc::new(PoiStoreMemory::new());
	if let Some(path) = &arguments.seed {
		let stats = import_file(store.as_ref(), path, &ImportOptions::default()).await?;
		eprintln!("seeded from {path:?}: {stats}");
	}

	let mut server = PoiServer::from_config(&server_config, store);
	let addr = server.start().await?;
	eprintln!("   {:30}  <-  {} POIs in memory", format!("http://{addr}/api/pois"), server.store().len());

	if let Some(milliseconds) = arguments.auto_shutdown {
		sleep(Duration::from_millis(milliseconds)).await;
	} else {
		loop {
			sleep(Duration::from_secs(60)).await;
		}
	}

	server.stop().await;
	Ok(())
}
