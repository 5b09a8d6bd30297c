#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "dataview", about = "Describe JSON documents as diagnostic value views")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	View {
		/// JSON document; reads stdin when omitted.
		path: Option<PathBuf>,
		#[arg(long)]
		pretty: bool,
		#[arg(long = "max-hops", default_value_t = 64)]
		max_hops: usize,
	},
	Kind {
		/// JSON document; reads stdin when omitted.
		path: Option<PathBuf>,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> dataview::view::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::View { path, pretty, max_hops } => cmd::view::run(path, pretty, max_hops),
		Commands::Kind { path } => cmd::kind::run(path),
	}
}
