mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Load all POIs and describe the map
	View(tools::view::Subcommand),

	/// Show a single POI
	Show(tools::show::Subcommand),

	#[clap(alias = "draw")]
	/// Draw a shape and save it as a POI
	Add(tools::add::Subcommand),

	#[clap(alias = "remove")]
	/// Delete POIs
	Delete(tools::delete::Subcommand),

	/// Import POIs from a GeoJSON file
	Import(tools::import::Subcommand),

	#[clap(alias = "server")]
	/// Serve the POI API from memory, for development
	Serve(tools::serve::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::View(arguments) => tools::view::run(arguments),
		Commands::Show(arguments) => tools::show::run(arguments),
		Commands::Add(arguments) => tools::add::run(arguments),
		Commands::Delete(arguments) => tools::delete::run(arguments),
		Commands::Import(arguments) => tools::import::run(arguments),
		Commands::Serve(arguments) => tools::serve::run(arguments),
	}
}
