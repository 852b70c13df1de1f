//! keycycle command-line host.
//!
//! Replays a script of key presses and cursor commands against an in-memory
//! buffer, expanding bound keys, then prints the resulting text and cursor.

mod cli;
mod script;
mod session;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use keycycle_config::FileSource;
use script::Step;
use session::Session;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let source = match &cli.config {
		Some(path) => Some(FileSource::new(path)),
		None => FileSource::default_location(),
	};
	if let Some(source) = &source {
		info!(path = %source.path().display(), "configuration source");
	}

	let session = Session::new(cli.language.clone(), source);
	let outcome = session.reload().context("failed to load configuration")?;
	debug!(?outcome, "initial load");

	let lines = if cli.script.is_empty() {
		read_stdin().await?
	} else {
		cli.script
	};

	for line in &lines {
		if let Some(step) = Step::parse(line) {
			session.run(&step).await?;
		}
	}

	print!("{}", session.render());
	Ok(())
}

async fn read_stdin() -> anyhow::Result<Vec<String>> {
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut script = Vec::new();
	while let Some(line) = lines.next_line().await.context("failed to read script from stdin")? {
		script.push(line);
	}
	Ok(script)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("keycycle=trace,debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
