use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "keycycle")]
#[command(about = "Cyclic key expansion against an in-memory buffer")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to $XDG_CONFIG_HOME/keycycle/config.toml)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Context identifier used to pick definitions (e.g. rust, markdown)
	#[arg(long, short = 'l', value_name = "ID")]
	pub language: Option<String>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,

	/// Script lines; read from stdin when omitted
	#[arg(value_name = "LINE", allow_hyphen_values = true)]
	pub script: Vec<String>,
}
