//! gramm command line.
//!
//! The manual trigger surface: submit text, get every match back as a flat
//! report. Unlike the inline engine, checker failures are printed and turn
//! into a non-zero exit status.

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gramm_checker::{CheckOrchestrator, HttpTransport, report};
use gramm_config::Preferences;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::cli::{Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let prefs = load_preferences(&cli)?;

	match cli.command {
		Command::Check { language, text } => {
			let text = match text {
				Some(text) => text,
				None => read_stdin().await?,
			};
			let language = language.unwrap_or_else(|| prefs.language_or_default().to_string());
			check(&prefs, &text, &language).await
		}
		Command::Config => {
			print!("{}", toml::to_string(&prefs).context("serializing preferences")?);
			Ok(ExitCode::SUCCESS)
		}
	}
}

fn load_preferences(cli: &Cli) -> Result<Preferences> {
	let Some(path) = cli.config.clone().or_else(gramm_config::default_path) else {
		debug!("config.no_platform_dir");
		return Ok(Preferences::default());
	};
	let prefs = gramm_config::load_or_default(&path).with_context(|| format!("loading {}", path.display()))?;
	debug!(path = %path.display(), language = %prefs.language, "config.loaded");
	Ok(prefs)
}

async fn read_stdin() -> Result<String> {
	let mut text = String::new();
	tokio::io::stdin()
		.read_to_string(&mut text)
		.await
		.context("reading text from stdin")?;
	Ok(text)
}

async fn check(prefs: &Preferences, text: &str, language: &str) -> Result<ExitCode> {
	let transport = HttpTransport::new(&prefs.api_url, prefs.request_timeout()).context("building HTTP client")?;
	let orchestrator = CheckOrchestrator::new(std::sync::Arc::new(transport));

	info!(endpoint = %prefs.api_url, language, chars = text.chars().count(), "cli.check");
	let result = orchestrator.check_strict(text, language).await;
	print!("{}", report::render(text, &result));

	Ok(if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn setup_tracing(verbose: bool) {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_max_level(if verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.init();
}
